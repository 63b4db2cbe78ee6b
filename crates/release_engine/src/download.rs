use std::io::{BufWriter, Write};
use std::path::Path;

use release_core::RemoteDocument;
use release_logging::{release_info, release_trace};

use crate::persist::{ensure_storage_dir, AtomicFileWriter};
use crate::{is_stored, FilesystemError, Fetcher, ProgressSink, SyncError, SyncEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub bytes: u64,
}

/// Download every document whose file name is not yet in `storage_dir`.
///
/// Stored files are never re-fetched or replaced. The first failure ends the
/// loop; documents saved before it stay on disk.
pub async fn fetch_missing(
    fetcher: &dyn Fetcher,
    documents: &[RemoteDocument],
    base_url: &str,
    storage_dir: &Path,
    chunk_size: usize,
    sink: &dyn ProgressSink,
) -> Result<FetchReport, SyncError> {
    ensure_storage_dir(storage_dir)?;
    let writer = AtomicFileWriter::new(storage_dir.to_path_buf());
    let mut report = FetchReport::default();

    for document in documents {
        let resolved = document.resolve(base_url);
        if is_stored(storage_dir, &resolved.file_name) {
            release_info!("File already exists: {}", resolved.file_name);
            sink.emit(SyncEvent::DocumentSkipped {
                file_name: resolved.file_name,
            });
            report.skipped += 1;
            continue;
        }

        release_info!("Downloading {} -> {}", resolved.url, resolved.file_name);
        sink.emit(SyncEvent::DocumentStarted {
            url: resolved.url.clone(),
            file_name: resolved.file_name.clone(),
        });

        let mut pending = writer.begin(&resolved.file_name)?;
        release_trace!("Staging {:?}", pending.target());
        let bytes = {
            let mut out = BufWriter::with_capacity(chunk_size, &mut pending);
            let bytes = fetcher.download(&resolved.url, &mut out, sink).await?;
            out.flush().map_err(FilesystemError::from)?;
            bytes
        };
        pending.commit()?;

        report.downloaded += 1;
        report.bytes += bytes;
        sink.emit(SyncEvent::DocumentSaved {
            file_name: resolved.file_name,
            bytes,
        });
    }

    Ok(report)
}
