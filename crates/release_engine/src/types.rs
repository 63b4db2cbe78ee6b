use std::fmt;
use std::io;
use std::path::PathBuf;

/// Progress reported while a run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    ListingFetched { url: String, count: usize },
    LocalScanned { dir: PathBuf, count: usize },
    DocumentSkipped { file_name: String },
    DocumentStarted { url: String, file_name: String },
    /// Running byte total for the download of `url`.
    Downloading { url: String, bytes: u64 },
    DocumentSaved { file_name: String, bytes: u64 },
    ArchiveStarted { path: PathBuf },
    ArchiveCreated { path: PathBuf, entries: usize },
    ArchiveSkipped { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilesystemError {
    #[error("storage directory missing or not writable: {0}")]
    StorageDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl From<walkdir::Error> for FilesystemError {
    fn from(err: walkdir::Error) -> Self {
        FilesystemError::Io(err.into())
    }
}

/// Any failure that terminates a run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("filesystem failure: {0}")]
    Filesystem(#[from] FilesystemError),
}
