use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use super::FileSaver;

/// Saves downloads into a fixed directory, creating it on first use
pub struct DirectoryFileSaver {
    dir: PathBuf,
}

impl DirectoryFileSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl FileSaver for DirectoryFileSaver {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf> {
        let name = std::path::Path::new(file_name)
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", file_name))?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(name);
        tokio::fs::write(&path, bytes).await?;
        info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}
