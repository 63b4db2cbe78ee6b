//! Release core: pure reconciliation logic and the run state machine.
mod archive_name;
mod confirm;
mod decision;
mod document;
mod effect;
mod msg;
mod question;
mod state;
mod update;
mod view_model;

pub use archive_name::{dated_archive_name, ArchiveNaming, DEFAULT_ARCHIVE_PREFIX};
pub use confirm::{Confirmer, ScriptedConfirmer};
pub use decision::{reconcile, SyncDecision};
pub use document::{has_pdf_suffix, RemoteDocument, ResolvedDocument};
pub use effect::Effect;
pub use msg::Msg;
pub use question::{parse_answer, Question};
pub use state::{ArchiveStatus, Phase, RunState};
pub use update::update;
pub use view_model::RunView;
