use crate::{reconcile, ArchiveStatus, Effect, Msg, Phase, Question, RunState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages that do not fit the current phase are ignored.
pub fn update(mut state: RunState, msg: Msg) -> (RunState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.phase() != Phase::Idle {
                return (state, Vec::new());
            }
            state.set_phase(Phase::Discovering);
            vec![Effect::DiscoverAndScan]
        }
        Msg::Reconciled {
            remote_count,
            local_count,
        } => {
            if state.phase() != Phase::Discovering {
                return (state, Vec::new());
            }
            let decision = reconcile(remote_count, local_count);
            state.record_counts(remote_count, local_count, decision);
            state.set_phase(Phase::AwaitingProceed(decision));
            vec![Effect::Confirm(
                decision.question(remote_count, local_count),
            )]
        }
        Msg::Answered(yes) => match state.phase() {
            Phase::AwaitingProceed(_) if yes => {
                state.set_phase(Phase::Fetching);
                vec![Effect::FetchMissing]
            }
            Phase::AwaitingProceed(_) => {
                state.set_phase(Phase::Aborted);
                vec![Effect::Abort]
            }
            Phase::AwaitingArchive if yes => {
                state.set_phase(Phase::Archiving);
                vec![Effect::BuildArchive]
            }
            Phase::AwaitingArchive => {
                state.record_archive(ArchiveStatus::Declined);
                state.set_phase(Phase::Finished);
                vec![Effect::Finish]
            }
            _ => Vec::new(),
        },
        Msg::FetchFinished {
            downloaded,
            skipped,
        } => {
            if state.phase() != Phase::Fetching {
                return (state, Vec::new());
            }
            state.record_fetch(downloaded, skipped);
            state.set_phase(Phase::AwaitingArchive);
            vec![Effect::Confirm(Question::BuildArchive {
                file_name: state.archive_file_name().to_string(),
            })]
        }
        Msg::ArchiveFinished { created } => {
            if state.phase() != Phase::Archiving {
                return (state, Vec::new());
            }
            let status = if created {
                ArchiveStatus::Created
            } else {
                ArchiveStatus::AlreadyExisted
            };
            state.record_archive(status);
            state.set_phase(Phase::Finished);
            vec![Effect::Finish]
        }
    };

    (state, effects)
}
