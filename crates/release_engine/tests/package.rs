use std::fs;
use std::io::Read;

use pretty_assertions::assert_eq;
use release_engine::{build_archive, ArchiveOutcome};
use tempfile::TempDir;

fn entry_names(path: &std::path::Path) -> Vec<String> {
    let file = fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn archive_holds_every_stored_file_at_root() {
    let temp = TempDir::new().unwrap();
    let storage = temp.path().join("pdfs");
    fs::create_dir_all(&storage).unwrap();
    fs::write(storage.join("doc1.pdf"), "one").unwrap();
    fs::write(storage.join("doc2.pdf"), "two").unwrap();
    let archive_path = temp.path().join("docs_03_18_2025.zip");

    let outcome = build_archive(&storage, &archive_path).unwrap();

    assert_eq!(
        outcome,
        ArchiveOutcome::Created {
            path: archive_path.clone(),
            entries: 2
        }
    );
    assert_eq!(entry_names(&archive_path), vec!["doc1.pdf", "doc2.pdf"]);

    let file = fs::File::open(&archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name("doc2.pdf").unwrap();
    assert_eq!(entry.compression(), zip::CompressionMethod::Deflated);
    let mut text = String::new();
    entry.read_to_string(&mut text).unwrap();
    assert_eq!(text, "two");
}

#[test]
fn existing_archive_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let storage = temp.path().join("pdfs");
    fs::create_dir_all(&storage).unwrap();
    fs::write(storage.join("doc1.pdf"), "one").unwrap();
    let archive_path = temp.path().join("today.zip");
    fs::write(&archive_path, "earlier archive").unwrap();
    let modified = fs::metadata(&archive_path).unwrap().modified().unwrap();

    let outcome = build_archive(&storage, &archive_path).unwrap();

    assert_eq!(
        outcome,
        ArchiveOutcome::AlreadyExists {
            path: archive_path.clone()
        }
    );
    assert_eq!(fs::read_to_string(&archive_path).unwrap(), "earlier archive");
    assert_eq!(
        fs::metadata(&archive_path).unwrap().modified().unwrap(),
        modified
    );
}

#[test]
fn nested_files_keep_paths_relative_to_storage_root() {
    let temp = TempDir::new().unwrap();
    let storage = temp.path().join("pdfs");
    fs::create_dir_all(storage.join("extra")).unwrap();
    fs::write(storage.join("top.pdf"), "t").unwrap();
    fs::write(storage.join("extra").join("inner.pdf"), "i").unwrap();
    let archive_path = temp.path().join("out.zip");

    build_archive(&storage, &archive_path).unwrap();

    assert_eq!(entry_names(&archive_path), vec!["extra/inner.pdf", "top.pdf"]);
}

#[test]
fn missing_storage_dir_produces_empty_archive() {
    let temp = TempDir::new().unwrap();
    let archive_path = temp.path().join("out").join("empty.zip");

    let outcome = build_archive(&temp.path().join("absent"), &archive_path).unwrap();

    assert_eq!(
        outcome,
        ArchiveOutcome::Created {
            path: archive_path.clone(),
            entries: 0
        }
    );
    assert!(entry_names(&archive_path).is_empty());
}

#[test]
fn leftover_download_temp_files_are_not_archived() {
    let temp = TempDir::new().unwrap();
    let storage = temp.path().join("pdfs");
    fs::create_dir_all(&storage).unwrap();
    fs::write(storage.join("doc1.pdf"), "one").unwrap();
    fs::write(storage.join(".tmpAbC123.part"), "half a docu").unwrap();
    let archive_path = temp.path().join("out.zip");

    let outcome = build_archive(&storage, &archive_path).unwrap();

    assert_eq!(
        outcome,
        ArchiveOutcome::Created {
            path: archive_path.clone(),
            entries: 1
        }
    );
    assert_eq!(entry_names(&archive_path), vec!["doc1.pdf"]);
}
