#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Kick off a run.
    Started,
    /// Discovery and the local scan both finished.
    Reconciled {
        remote_count: usize,
        local_count: usize,
    },
    /// Answer to the most recent `Effect::Confirm`.
    Answered(bool),
    /// The download loop finished without error.
    FetchFinished { downloaded: usize, skipped: usize },
    /// Packaging finished; `created` is false when today's archive already existed.
    ArchiveFinished { created: bool },
}
