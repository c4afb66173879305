use aws_config::SdkConfig;

/// Load the shared AWS configuration for the given region.
///
/// Credentials come from the default provider chain; on Lambda that is the
/// function's execution role.
pub async fn load_aws_config(region: &str) -> SdkConfig {
    tracing::info!("Loading AWS configuration for region: {}", region);

    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    tracing::info!(
        has_access_key_id = has_access_key,
        has_secret_access_key = has_secret_key,
        "AWS credentials environment check"
    );

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await;

    tracing::info!(
        region = ?aws_config.region(),
        "AWS configuration loaded"
    );

    aws_config
}

/// Render an SDK error and its source chain as `outer: inner: ...`.
///
/// `DisplayErrorContext` appends the full `Debug` form, which can carry the
/// raw HTTP response; this keeps only the messages so the text is safe to
/// hand back to callers.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
