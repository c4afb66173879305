pub mod aws;
pub mod config;
pub mod http;
pub mod invocation;
pub mod lambda;
pub mod logging;
pub mod repositories;
