use std::fmt;

/// A yes/no decision point put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    ProceedDespiteInSync { count: usize },
    ProceedDespiteLocalAhead { remote_count: usize, local_count: usize },
    DownloadNew { count: usize },
    BuildArchive { file_name: String },
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::ProceedDespiteInSync { count } => write!(
                f,
                "Local copy already holds {count} documents, matching the listing. Check for missing files anyway?"
            ),
            Question::ProceedDespiteLocalAhead {
                remote_count,
                local_count,
            } => write!(
                f,
                "Warning: {local_count} local documents but only {remote_count} listed remotely; documents may have been removed. Continue?"
            ),
            Question::DownloadNew { count } => {
                write!(f, "{count} new documents available. Download them?")
            }
            Question::BuildArchive { file_name } => {
                write!(f, "Package all local documents into {file_name}?")
            }
        }
    }
}

/// Only "y" and "yes" (any case, surrounding whitespace ignored) are affirmative.
pub fn parse_answer(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
