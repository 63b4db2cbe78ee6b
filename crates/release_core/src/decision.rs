use std::cmp::Ordering;

use crate::Question;

/// Outcome of comparing the remote document count with the local one.
///
/// Counts only: equal numbers of added and removed remote documents read as
/// `InSync`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDecision {
    InSync,
    LocalAheadOfRemote,
    RemoteAheadOfLocal(usize),
}

pub fn reconcile(remote_count: usize, local_count: usize) -> SyncDecision {
    match remote_count.cmp(&local_count) {
        Ordering::Equal => SyncDecision::InSync,
        Ordering::Less => SyncDecision::LocalAheadOfRemote,
        Ordering::Greater => SyncDecision::RemoteAheadOfLocal(remote_count - local_count),
    }
}

impl SyncDecision {
    /// The confirmation asked before fetching, for the given counts.
    pub fn question(&self, remote_count: usize, local_count: usize) -> Question {
        match *self {
            SyncDecision::InSync => Question::ProceedDespiteInSync {
                count: remote_count,
            },
            SyncDecision::LocalAheadOfRemote => Question::ProceedDespiteLocalAhead {
                remote_count,
                local_count,
            },
            SyncDecision::RemoteAheadOfLocal(count) => Question::DownloadNew { count },
        }
    }
}
