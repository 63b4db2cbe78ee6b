use crate::view_model::RunView;
use crate::SyncDecision;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Discovering,
    AwaitingProceed(SyncDecision),
    Fetching,
    AwaitingArchive,
    Archiving,
    Finished,
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveStatus {
    Created,
    AlreadyExisted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunState {
    phase: Phase,
    archive_file_name: String,
    remote_count: Option<usize>,
    local_count: Option<usize>,
    decision: Option<SyncDecision>,
    downloaded: usize,
    skipped: usize,
    archive: Option<ArchiveStatus>,
}

impl RunState {
    pub fn new(archive_file_name: impl Into<String>) -> Self {
        Self {
            archive_file_name: archive_file_name.into(),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn archive_file_name(&self) -> &str {
        &self.archive_file_name
    }

    pub fn view(&self) -> RunView {
        RunView {
            phase: self.phase,
            remote_count: self.remote_count,
            local_count: self.local_count,
            decision: self.decision,
            downloaded: self.downloaded,
            skipped: self.skipped,
            archive: self.archive,
            archive_file_name: self.archive_file_name.clone(),
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn record_counts(&mut self, remote: usize, local: usize, decision: SyncDecision) {
        self.remote_count = Some(remote);
        self.local_count = Some(local);
        self.decision = Some(decision);
    }

    pub(crate) fn record_fetch(&mut self, downloaded: usize, skipped: usize) {
        self.downloaded = downloaded;
        self.skipped = skipped;
    }

    pub(crate) fn record_archive(&mut self, status: ArchiveStatus) {
        self.archive = Some(status);
    }
}
