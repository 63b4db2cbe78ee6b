use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ARCHIVE_PREFIX: &str = "jfk_release_2025_pdfs";

/// How the archive file is named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchiveNaming {
    /// `{prefix}_{MM}_{DD}_{YYYY}.zip`, one archive per calendar day.
    Dated { prefix: String },
    /// A fixed literal file name.
    Fixed { file_name: String },
}

impl Default for ArchiveNaming {
    fn default() -> Self {
        ArchiveNaming::Dated {
            prefix: DEFAULT_ARCHIVE_PREFIX.to_string(),
        }
    }
}

impl ArchiveNaming {
    pub fn file_name(&self, date: NaiveDate) -> String {
        match self {
            ArchiveNaming::Dated { prefix } => dated_archive_name(prefix, date),
            ArchiveNaming::Fixed { file_name } => file_name.clone(),
        }
    }
}

pub fn dated_archive_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}.zip", date.format("%m_%d_%Y"))
}
