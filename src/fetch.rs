use crate::{PageSource, ScrapeError};
use std::path::Path;
use tracing::{debug, info};

/// Plain GET, whole body, no retry and no status check. A 404 page is
/// parsed like any other document.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PageSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("Visit {}", url);
        Ok(self.client.get(url).send().await?.text().await?)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        debug!("Visit {}", url);
        Ok(self.client.get(url).send().await?.bytes().await?.to_vec())
    }
}

/// Fetch one image and write the whole buffer to `path`. Parent directories
/// are never created; a missing one fails the run.
pub async fn download_image<S: PageSource>(
    source: &S,
    url: &str,
    path: &Path,
) -> Result<(), ScrapeError> {
    let bytes = source.fetch_bytes(url).await?;
    tokio::fs::write(path, &bytes).await?;
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::fs;

    struct CannedSource {
        bytes: Vec<u8>,
    }

    #[async_trait::async_trait]
    impl PageSource for CannedSource {
        async fn fetch_text(&self, _url: &str) -> Result<String, ScrapeError> {
            Ok(String::from_utf8_lossy(&self.bytes).into_owned())
        }

        async fn fetch_bytes(&self, _url: &str) -> Result<Vec<u8>, ScrapeError> {
            Ok(self.bytes.clone())
        }
    }

    #[tokio::test]
    async fn writes_the_fetched_bytes() {
        let source = CannedSource {
            bytes: vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10],
        };
        let path = std::env::temp_dir().join("chapter-scraper-image-test.jpg");

        download_image(&source, "http://example.org/pic.jpg", &path)
            .await
            .unwrap();
        assert_eq!(fs::read(&path).await.unwrap(), source.bytes);

        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_directory_is_fatal() {
        let source = CannedSource {
            bytes: vec![1, 2, 3],
        };
        let path = std::env::temp_dir()
            .join("chapter-scraper-no-such-dir")
            .join("pic.jpg");

        let err = download_image(&source, "http://example.org/pic.jpg", &path)
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Io(_)));
    }
}
