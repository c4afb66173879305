use async_trait::async_trait;

/// Repository for persisting audio artifacts in an object store.
#[async_trait]
pub trait AudioStorageRepository: Send + Sync {
    /// Write `body` under `key`, replacing any existing object
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str)
        -> Result<(), String>;

    /// Public URL of the object stored under `key`
    fn public_url(&self, key: &str) -> String;
}
