//! Release engine: network, filesystem and archive IO plus the pipeline driver.
mod config;
mod discover;
mod download;
mod fetch;
mod local;
mod package;
mod persist;
mod pipeline;
mod types;

pub use config::{SyncConfig, DEFAULT_BASE_URL, DEFAULT_LISTING_URL, DEFAULT_STORAGE_DIR};
pub use discover::{discover, extract_pdf_links, Listing};
pub use download::{fetch_missing, FetchReport};
pub use fetch::{FetchSettings, Fetcher, ProgressSink, ReqwestFetcher, DEFAULT_CHUNK_SIZE};
pub use local::{count_local_documents, is_stored};
pub use package::{build_archive, ArchiveOutcome};
pub use persist::{ensure_storage_dir, AtomicFileWriter, PendingFile};
pub use pipeline::ReleaseSync;
pub use types::{FailureKind, FetchError, FilesystemError, SyncError, SyncEvent};
