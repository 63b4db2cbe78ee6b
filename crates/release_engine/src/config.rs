use std::path::PathBuf;

use chrono::NaiveDate;
use release_core::ArchiveNaming;

use crate::FetchSettings;

pub const DEFAULT_LISTING_URL: &str = "https://www.archives.gov/research/jfk/release-2025";
pub const DEFAULT_BASE_URL: &str = "https://www.archives.gov";
pub const DEFAULT_STORAGE_DIR: &str = "pdfs";

/// Everything a run needs to know about where to read and write.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub listing_url: String,
    /// Prefix for hrefs that do not start with "http".
    pub base_url: String,
    pub storage_dir: PathBuf,
    pub archive_dir: PathBuf,
    pub archive_naming: ArchiveNaming,
    pub fetch: FetchSettings,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            archive_dir: PathBuf::from("."),
            archive_naming: ArchiveNaming::default(),
            fetch: FetchSettings::default(),
        }
    }
}

impl SyncConfig {
    pub fn archive_file_name(&self, date: NaiveDate) -> String {
        self.archive_naming.file_name(date)
    }

    pub fn archive_path(&self, date: NaiveDate) -> PathBuf {
        self.archive_dir.join(self.archive_file_name(date))
    }
}
