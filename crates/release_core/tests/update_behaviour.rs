use std::sync::Once;

use pretty_assertions::assert_eq;
use release_core::{
    update, ArchiveStatus, Effect, Msg, Phase, Question, RunState, SyncDecision,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(release_logging::initialize_for_tests);
}

fn reconciled(remote_count: usize, local_count: usize) -> (RunState, Vec<Effect>) {
    let (state, _) = update(RunState::new("docs.zip"), Msg::Started);
    update(
        state,
        Msg::Reconciled {
            remote_count,
            local_count,
        },
    )
}

#[test]
fn start_requests_discovery_once() {
    init_logging();
    let (state, effects) = update(RunState::new("docs.zip"), Msg::Started);
    assert_eq!(state.phase(), Phase::Discovering);
    assert_eq!(effects, vec![Effect::DiscoverAndScan]);

    let (state, effects) = update(state, Msg::Started);
    assert_eq!(state.phase(), Phase::Discovering);
    assert!(effects.is_empty());
}

#[test]
fn in_sync_asks_before_proceeding() {
    init_logging();
    let (state, effects) = reconciled(10, 10);
    assert_eq!(state.phase(), Phase::AwaitingProceed(SyncDecision::InSync));
    assert_eq!(
        effects,
        vec![Effect::Confirm(Question::ProceedDespiteInSync { count: 10 })]
    );
}

#[test]
fn local_ahead_warns_before_proceeding() {
    init_logging();
    let (state, effects) = reconciled(7, 10);
    assert_eq!(
        state.phase(),
        Phase::AwaitingProceed(SyncDecision::LocalAheadOfRemote)
    );
    assert_eq!(
        effects,
        vec![Effect::Confirm(Question::ProceedDespiteLocalAhead {
            remote_count: 7,
            local_count: 10
        })]
    );
}

#[test]
fn remote_ahead_offers_the_delta() {
    init_logging();
    let (state, effects) = reconciled(12, 10);
    assert_eq!(
        state.phase(),
        Phase::AwaitingProceed(SyncDecision::RemoteAheadOfLocal(2))
    );
    assert_eq!(
        effects,
        vec![Effect::Confirm(Question::DownloadNew { count: 2 })]
    );
    assert_eq!(state.view().remote_count, Some(12));
    assert_eq!(state.view().local_count, Some(10));
}

#[test]
fn declining_to_proceed_aborts_without_further_effects() {
    init_logging();
    let (state, _) = reconciled(12, 10);
    let (state, effects) = update(state, Msg::Answered(false));
    assert_eq!(state.phase(), Phase::Aborted);
    assert_eq!(effects, vec![Effect::Abort]);

    // Late messages after an abort change nothing.
    let (after, effects) = update(
        state.clone(),
        Msg::FetchFinished {
            downloaded: 1,
            skipped: 0,
        },
    );
    assert_eq!(after, state);
    assert!(effects.is_empty());
}

#[test]
fn full_run_builds_archive_when_confirmed() {
    init_logging();
    let (state, _) = reconciled(2, 0);
    let (state, effects) = update(state, Msg::Answered(true));
    assert_eq!(state.phase(), Phase::Fetching);
    assert_eq!(effects, vec![Effect::FetchMissing]);

    let (state, effects) = update(
        state,
        Msg::FetchFinished {
            downloaded: 2,
            skipped: 0,
        },
    );
    assert_eq!(state.phase(), Phase::AwaitingArchive);
    assert_eq!(
        effects,
        vec![Effect::Confirm(Question::BuildArchive {
            file_name: "docs.zip".to_string()
        })]
    );

    let (state, effects) = update(state, Msg::Answered(true));
    assert_eq!(state.phase(), Phase::Archiving);
    assert_eq!(effects, vec![Effect::BuildArchive]);

    let (state, effects) = update(state, Msg::ArchiveFinished { created: true });
    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(effects, vec![Effect::Finish]);

    let view = state.view();
    assert_eq!(view.downloaded, 2);
    assert_eq!(view.archive, Some(ArchiveStatus::Created));
    assert!(view.summary().contains("zipped into docs.zip"));
}

#[test]
fn declining_archive_finishes_without_packaging() {
    init_logging();
    let (state, _) = reconciled(1, 1);
    let (state, _) = update(state, Msg::Answered(true));
    let (state, _) = update(
        state,
        Msg::FetchFinished {
            downloaded: 0,
            skipped: 1,
        },
    );
    let (state, effects) = update(state, Msg::Answered(false));

    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(effects, vec![Effect::Finish]);
    assert_eq!(state.view().archive, Some(ArchiveStatus::Declined));
    assert!(state.view().summary().contains("No archive created"));
}

#[test]
fn existing_archive_is_reported_as_skipped() {
    init_logging();
    let (state, _) = reconciled(1, 1);
    let (state, _) = update(state, Msg::Answered(true));
    let (state, _) = update(
        state,
        Msg::FetchFinished {
            downloaded: 0,
            skipped: 1,
        },
    );
    let (state, _) = update(state, Msg::Answered(true));
    let (state, _) = update(state, Msg::ArchiveFinished { created: false });

    assert_eq!(state.view().archive, Some(ArchiveStatus::AlreadyExisted));
    assert!(state.view().summary().contains("already exists"));
}

#[test]
fn answers_outside_a_question_are_ignored() {
    init_logging();
    let (state, _) = update(RunState::new("docs.zip"), Msg::Started);
    let (next, effects) = update(state.clone(), Msg::Answered(true));
    assert_eq!(next, state);
    assert!(effects.is_empty());
}
