use crate::core::Storage;
use crate::domain::ports::STDIO_PATH;
use crate::utils::error::{LeagueError, Result};
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Filesystem storage; the path `-` maps to stdin for reads and stdout for writes.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        if path == STDIO_PATH {
            let mut data = Vec::new();
            tokio::io::stdin().read_to_end(&mut data).await?;
            return Ok(data);
        }

        tokio::fs::read(path)
            .await
            .map_err(|e| LeagueError::from_io(path, e))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        if path == STDIO_PATH {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(data).await?;
            stdout.flush().await?;
            return Ok(());
        }

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| LeagueError::from_io(path, e))?;
            }
        }

        tokio::fs::write(path, data)
            .await
            .map_err(|e| LeagueError::from_io(path, e))
    }
}
