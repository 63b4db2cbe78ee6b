use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use release_logging::{release_debug, release_info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::persist::{is_pending_name, AtomicFileWriter};
use crate::FilesystemError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    Created { path: PathBuf, entries: usize },
    /// An archive with this name was already there and was left untouched.
    AlreadyExists { path: PathBuf },
}

impl ArchiveOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ArchiveOutcome::Created { path, .. } | ArchiveOutcome::AlreadyExists { path } => path,
        }
    }
}

/// Zip every file under `storage_dir` into `archive_path` with deflate.
///
/// Entry names are relative to `storage_dir`. If `archive_path` exists the
/// call does nothing.
pub fn build_archive(
    storage_dir: &Path,
    archive_path: &Path,
) -> Result<ArchiveOutcome, FilesystemError> {
    if archive_path.exists() {
        release_info!(
            "Zip file {:?} already exists. Skipping zipping.",
            archive_path
        );
        return Ok(ArchiveOutcome::AlreadyExists {
            path: archive_path.to_path_buf(),
        });
    }

    let entries = collect_entries(storage_dir)?;

    let (dir, file_name) = split_archive_path(archive_path)?;
    let writer = AtomicFileWriter::new(dir);
    let mut pending = writer.begin(&file_name)?;
    {
        let mut zip = ZipWriter::new(BufWriter::new(pending.file_mut()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, path) in &entries {
            release_debug!("Adding {} to archive", name);
            zip.start_file(name.as_str(), options)?;
            let mut source = File::open(path)?;
            io::copy(&mut source, &mut zip)?;
        }
        let mut inner = zip.finish()?;
        inner.flush()?;
    }
    let path = pending.commit()?;

    release_info!("Created archive {:?} with {} entries", path, entries.len());
    Ok(ArchiveOutcome::Created {
        path,
        entries: entries.len(),
    })
}

/// Files under `root` as (archive name, path), sorted by name. Uncommitted
/// download temp files are left out.
fn collect_entries(root: &Path) -> Result<Vec<(String, PathBuf)>, FilesystemError> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    let mut entries = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let pending = is_pending_name(&entry.file_name().to_string_lossy());
        if !entry.file_type().is_file() || pending {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| FilesystemError::Io(io::Error::other(e)))?;
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        entries.push((name, entry.into_path()));
    }
    entries.sort();
    Ok(entries)
}

fn split_archive_path(archive_path: &Path) -> Result<(PathBuf, String), FilesystemError> {
    let file_name = archive_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            FilesystemError::StorageDir(format!("{} has no file name", archive_path.display()))
        })?;
    let dir = match archive_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name))
}
