use crate::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the listing page and count the local documents.
    DiscoverAndScan,
    /// Ask the user and report the answer back as `Msg::Answered`.
    Confirm(Question),
    /// Download every listed document that is not stored locally.
    FetchMissing,
    BuildArchive,
    /// The run completed normally.
    Finish,
    /// The user declined to continue; nothing further may touch the filesystem.
    Abort,
}
