use std::collections::VecDeque;
use std::sync::Arc;

use chrono::NaiveDate;
use release_core::{update, Confirmer, Effect, Msg, RunState, RunView};
use release_logging::{release_info, release_warn};

use crate::{
    build_archive, count_local_documents, discover, fetch_missing, ArchiveOutcome, FetchError,
    Fetcher, Listing, ProgressSink, ReqwestFetcher, SyncConfig, SyncError, SyncEvent,
};

/// Runs discovery, reconciliation, download and packaging in sequence,
/// executing the effects produced by the core state machine.
pub struct ReleaseSync {
    config: SyncConfig,
    fetcher: Arc<dyn Fetcher>,
}

impl ReleaseSync {
    pub fn new(config: SyncConfig) -> Result<Self, FetchError> {
        let fetcher = Arc::new(ReqwestFetcher::new(&config.fetch)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: SyncConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Drive one run to completion. `today` picks the archive name.
    ///
    /// A declined confirmation ends the run with `Ok`; IO failures end it
    /// with the first error.
    pub async fn run(
        &self,
        today: NaiveDate,
        confirmer: &mut dyn Confirmer,
        sink: &dyn ProgressSink,
    ) -> Result<RunView, SyncError> {
        let config = &self.config;
        let archive_path = config.archive_path(today);
        let mut state = RunState::new(config.archive_file_name(today));
        let mut listing = Listing::default();
        let mut inbox = VecDeque::from([Msg::Started]);

        while let Some(msg) = inbox.pop_front() {
            let (next, effects) = update(state, msg);
            state = next;

            for effect in effects {
                match effect {
                    Effect::DiscoverAndScan => {
                        listing = discover(self.fetcher.as_ref(), &config.listing_url).await?;
                        sink.emit(SyncEvent::ListingFetched {
                            url: config.listing_url.clone(),
                            count: listing.count(),
                        });
                        let local_count = count_local_documents(&config.storage_dir)?;
                        sink.emit(SyncEvent::LocalScanned {
                            dir: config.storage_dir.clone(),
                            count: local_count,
                        });
                        inbox.push_back(Msg::Reconciled {
                            remote_count: listing.count(),
                            local_count,
                        });
                    }
                    Effect::Confirm(question) => {
                        let answer = confirmer.confirm(&question);
                        release_info!("Asked {:?}, answered {}", question, answer);
                        inbox.push_back(Msg::Answered(answer));
                    }
                    Effect::FetchMissing => {
                        let report = fetch_missing(
                            self.fetcher.as_ref(),
                            listing.documents(),
                            &config.base_url,
                            &config.storage_dir,
                            config.fetch.chunk_size,
                            sink,
                        )
                        .await?;
                        release_info!(
                            "Fetch finished: {} downloaded ({} bytes), {} skipped",
                            report.downloaded,
                            report.bytes,
                            report.skipped
                        );
                        inbox.push_back(Msg::FetchFinished {
                            downloaded: report.downloaded,
                            skipped: report.skipped,
                        });
                    }
                    Effect::BuildArchive => {
                        sink.emit(SyncEvent::ArchiveStarted {
                            path: archive_path.clone(),
                        });
                        let outcome = build_archive(&config.storage_dir, &archive_path)?;
                        let created = matches!(outcome, ArchiveOutcome::Created { .. });
                        sink.emit(match outcome {
                            ArchiveOutcome::Created { path, entries } => {
                                SyncEvent::ArchiveCreated { path, entries }
                            }
                            ArchiveOutcome::AlreadyExists { path } => {
                                SyncEvent::ArchiveSkipped { path }
                            }
                        });
                        inbox.push_back(Msg::ArchiveFinished { created });
                    }
                    Effect::Finish => release_info!("Run finished"),
                    Effect::Abort => release_warn!("Run aborted by user"),
                }
            }
        }

        Ok(state.view())
    }
}
