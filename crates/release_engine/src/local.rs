use std::fs;
use std::path::Path;

use release_core::has_pdf_suffix;

use crate::FilesystemError;

/// Count entries in `dir` whose name ends in ".pdf" (any case).
/// A missing directory counts as empty.
pub fn count_local_documents(dir: &Path) -> Result<usize, FilesystemError> {
    if !dir.exists() {
        return Ok(0);
    }
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if has_pdf_suffix(&entry.file_name().to_string_lossy()) {
            count += 1;
        }
    }
    Ok(count)
}

/// Whether a document with this file name is already stored.
pub fn is_stored(dir: &Path, file_name: &str) -> bool {
    dir.join(file_name).exists()
}

#[cfg(test)]
mod tests {
    use super::{count_local_documents, is_stored};
    use tempfile::TempDir;

    #[test]
    fn missing_dir_counts_as_zero() {
        let temp = TempDir::new().unwrap();
        assert_eq!(count_local_documents(&temp.path().join("nope")).unwrap(), 0);
    }

    #[test]
    fn counts_only_pdf_names() {
        let temp = TempDir::new().unwrap();
        for name in ["a.pdf", "B.PDF", "notes.txt", ".tmp123.part"] {
            std::fs::write(temp.path().join(name), b"x").unwrap();
        }
        assert_eq!(count_local_documents(temp.path()).unwrap(), 2);
        assert!(is_stored(temp.path(), "a.pdf"));
        assert!(!is_stored(temp.path(), "c.pdf"));
    }
}
