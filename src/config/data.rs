use crate::domain::model::FIRST_FILE;
use crate::domain::ports::Files;
use crate::utils::error::{Result, TourError};
use std::path::Path;

/// Name the seeded first file points at.
pub const SECOND_FILE: &str = "two";

const SAMPLE_SECOND_CONTENT: &[u8] = b"hello from the end of the chain\n";

/// File access rooted at a directory on the local disk.
#[derive(Debug, Clone)]
pub struct DataDir {
    base_path: String,
}

impl DataDir {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    /// Writes the two-file sample chain when the first file is absent, so a
    /// fresh checkout runs without setup. An existing data directory is left
    /// untouched.
    pub async fn ensure_sample_chain(&self) -> Result<()> {
        match self.read(FIRST_FILE).await {
            Ok(_) => Ok(()),
            Err(TourError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                self.write(FIRST_FILE, format!("{SECOND_FILE}\n").as_bytes())
                    .await?;
                self.write(SECOND_FILE, SAMPLE_SECOND_CONTENT).await?;
                tracing::info!("Seeded sample chain in {}", self.base_path);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl Files for DataDir {
    fn read(&self, name: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send {
        let full_path = Path::new(&self.base_path).join(name);
        async move { Ok(tokio::fs::read(full_path).await?) }
    }

    fn write(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        let full_path = Path::new(&self.base_path).join(name);
        let data = data.to_vec();
        async move {
            if let Some(parent) = full_path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(full_path, data).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn seeds_sample_chain_when_first_file_is_absent() {
        tokio_test::block_on(async {
            let dir = TempDir::new().unwrap();
            let files = DataDir::new(dir.path().to_str().unwrap().to_string());

            files.ensure_sample_chain().await.unwrap();

            let first = files.read(FIRST_FILE).await.unwrap();
            assert_eq!(first, b"two\n");
            let second = files.read(SECOND_FILE).await.unwrap();
            assert_eq!(second, SAMPLE_SECOND_CONTENT);
        });
    }

    #[test]
    fn seeding_never_clobbers_existing_data() {
        tokio_test::block_on(async {
            let dir = TempDir::new().unwrap();
            let files = DataDir::new(dir.path().to_str().unwrap().to_string());

            files.write(FIRST_FILE, b"two\n").await.unwrap();
            files.write(SECOND_FILE, b"edited by hand\n").await.unwrap();
            files.ensure_sample_chain().await.unwrap();

            let second = files.read(SECOND_FILE).await.unwrap();
            assert_eq!(second, b"edited by hand\n");
        });
    }

    #[test]
    fn read_missing_file_reports_not_found() {
        tokio_test::block_on(async {
            let dir = TempDir::new().unwrap();
            let files = DataDir::new(dir.path().to_str().unwrap().to_string());

            let err = files.read("absent").await.unwrap_err();
            match err {
                TourError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
                other => panic!("unexpected error: {other}"),
            }
        });
    }
}
