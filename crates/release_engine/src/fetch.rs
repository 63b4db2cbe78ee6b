use std::io::Write;
use std::time::Duration;

use futures_util::StreamExt;
use release_logging::release_debug;

use crate::{FailureKind, FetchError, FilesystemError, SyncError, SyncEvent};

/// Write buffer size for document downloads.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    /// Whole-request limit for the listing page.
    pub request_timeout: Duration,
    /// Longest gap between reads. Downloads have no overall limit, only this.
    pub read_timeout: Duration,
    pub redirect_limit: usize,
    pub chunk_size: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            read_timeout: Duration::from_secs(60),
            redirect_limit: 5,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: SyncEvent);
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the body as text.
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;

    /// GET `url` and stream the body into `dest`, returning the byte count.
    async fn download(
        &self,
        url: &str,
        dest: &mut (dyn Write + Send),
        sink: &dyn ProgressSink,
    ) -> Result<u64, SyncError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    request_timeout: Duration,
}

impl ReqwestFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .read_timeout(settings.read_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            request_timeout: settings.request_timeout,
        })
    }

    async fn get(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Response, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, format!("{url}: {err}")))?;

        let mut request = self.client.get(parsed);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        let response = request
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("{url}: {status}"),
            ));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get(url, Some(self.request_timeout)).await?;
        let body = response.text().await.map_err(map_reqwest_error)?;
        release_debug!("Fetched listing {} ({} bytes)", url, body.len());
        Ok(body)
    }

    async fn download(
        &self,
        url: &str,
        dest: &mut (dyn Write + Send),
        sink: &dyn ProgressSink,
    ) -> Result<u64, SyncError> {
        // A large document may take any time to arrive as long as it keeps moving.
        let response = self.get(url, None).await?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            dest.write_all(&chunk).map_err(FilesystemError::from)?;
            written += chunk.len() as u64;
            sink.emit(SyncEvent::Downloading {
                url: url.to_string(),
                bytes: written,
            });
        }
        Ok(written)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
