use crate::{ArchiveStatus, Phase, SyncDecision};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunView {
    pub phase: Phase,
    pub remote_count: Option<usize>,
    pub local_count: Option<usize>,
    pub decision: Option<SyncDecision>,
    pub downloaded: usize,
    pub skipped: usize,
    pub archive: Option<ArchiveStatus>,
    pub archive_file_name: String,
}

impl RunView {
    /// One-line summary printed when a run ends.
    pub fn summary(&self) -> String {
        match self.phase {
            Phase::Aborted => "Aborted; no documents were fetched.".to_string(),
            Phase::Finished => {
                let fetched = format!(
                    "{} documents downloaded, {} already present",
                    self.downloaded, self.skipped
                );
                match self.archive {
                    Some(ArchiveStatus::Created) => format!(
                        "{fetched}. All PDF files have been downloaded and zipped into {}",
                        self.archive_file_name
                    ),
                    Some(ArchiveStatus::AlreadyExisted) => format!(
                        "{fetched}. Archive {} already exists; zipping skipped.",
                        self.archive_file_name
                    ),
                    Some(ArchiveStatus::Declined) | None => {
                        format!("{fetched}. No archive created.")
                    }
                }
            }
            phase => format!("Run stopped in phase {phase:?}"),
        }
    }
}
