use async_trait::async_trait;

/// An object that can be used to get and put blobs of exported results.
#[async_trait]
pub trait BlobStorageProvider {
    async fn maybe_get(&self, blob_name: &str) -> Result<Option<Vec<u8>>, std::io::Error>;
    async fn put(&self, blob_name: &str, contents: Vec<u8>) -> Result<(), std::io::Error>;
}

/// A [`BlobStorageProvider`] for local disk, where blob names are file paths
pub struct LocalDisk;

#[async_trait]
impl BlobStorageProvider for LocalDisk {
    async fn maybe_get(&self, blob_name: &str) -> Result<Option<Vec<u8>>, std::io::Error> {
        if std::path::Path::new(blob_name).try_exists()? {
            Ok(Some(std::fs::read(blob_name)?))
        } else {
            Ok(None)
        }
    }

    async fn put(&self, blob_name: &str, contents: Vec<u8>) -> Result<(), std::io::Error> {
        let mut dir: std::path::PathBuf = blob_name.into();
        dir.pop();
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(blob_name, contents)
    }
}
