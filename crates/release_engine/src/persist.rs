use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::FilesystemError;

const PENDING_PREFIX: &str = ".";
const PENDING_SUFFIX: &str = ".part";

/// True for names `AtomicFileWriter` uses for uncommitted files.
pub(crate) fn is_pending_name(name: &str) -> bool {
    name.starts_with(PENDING_PREFIX) && name.ends_with(PENDING_SUFFIX)
}

/// Ensure the storage directory exists; create if missing.
pub fn ensure_storage_dir(dir: &Path) -> Result<(), FilesystemError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| FilesystemError::StorageDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(FilesystemError::StorageDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| FilesystemError::StorageDir(e.to_string()))?;
    }
    // Basic writability probe.
    NamedTempFile::new_in(dir).map_err(|e| FilesystemError::StorageDir(e.to_string()))?;
    Ok(())
}

/// Writes files into `dir` through a hidden temp file that is only moved to
/// its final name on commit. Existing files are never replaced.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn begin(&self, file_name: &str) -> Result<PendingFile, FilesystemError> {
        ensure_storage_dir(&self.dir)?;
        let tmp = tempfile::Builder::new()
            .prefix(PENDING_PREFIX)
            .suffix(PENDING_SUFFIX)
            .tempfile_in(&self.dir)?;
        Ok(PendingFile {
            tmp,
            target: self.dir.join(file_name),
        })
    }
}

/// An in-progress file. Dropping it without `commit` removes the temp file.
pub struct PendingFile {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl PendingFile {
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn file_mut(&mut self) -> &mut File {
        self.tmp.as_file_mut()
    }

    /// Flush, sync and move into place. Fails if the target already exists.
    pub fn commit(mut self) -> Result<PathBuf, FilesystemError> {
        self.tmp.flush()?;
        self.tmp.as_file_mut().sync_all()?;
        self.tmp
            .persist_noclobber(&self.target)
            .map_err(|e| FilesystemError::Io(e.error))?;
        Ok(self.target)
    }
}

impl Write for PendingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.tmp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.tmp.flush()
    }
}
