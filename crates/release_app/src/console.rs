use release_engine::{ProgressSink, SyncEvent};
use release_logging::release_trace;

/// Prints run progress as status lines on stdout.
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn emit(&self, event: SyncEvent) {
        match status_line(&event) {
            Some(line) => println!("{line}"),
            None => release_trace!("{:?}", event),
        }
    }
}

/// The user-facing line for an event; per-chunk progress has none.
pub fn status_line(event: &SyncEvent) -> Option<String> {
    let line = match event {
        SyncEvent::ListingFetched { url, count } => format!("Found {count} PDF links on {url}"),
        SyncEvent::LocalScanned { dir, count } => {
            format!("{count} PDF files already in {}", dir.display())
        }
        SyncEvent::DocumentSkipped { file_name } => format!("File already exists: {file_name}"),
        SyncEvent::DocumentStarted { url, .. } => format!("Downloading: {url}"),
        SyncEvent::Downloading { .. } => return None,
        SyncEvent::DocumentSaved { file_name, bytes } => {
            format!("Saved {file_name} ({bytes} bytes)")
        }
        SyncEvent::ArchiveStarted { path } => format!("Creating zip file: {}", path.display()),
        SyncEvent::ArchiveCreated { path, entries } => {
            format!("Zipped {entries} files into {}", path.display())
        }
        SyncEvent::ArchiveSkipped { path } => format!(
            "Zip file {} already exists. Skipping zipping.",
            path.display()
        ),
    };
    Some(line)
}
