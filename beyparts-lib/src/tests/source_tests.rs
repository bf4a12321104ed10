use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_image_stem_strips_extension() {
    assert_eq!(ListedFile::file("dran_sword.webp").image_stem(), Some("dran_sword"));
    assert_eq!(ListedFile::file("1-60.WEBP").image_stem(), Some("1-60"));
    assert_eq!(ListedFile::file("gear.ball.webp").image_stem(), Some("gear.ball"));
}

#[test]
fn test_image_stem_rejects_non_images() {
    assert_eq!(ListedFile::file("notes.txt").image_stem(), None);
    assert_eq!(ListedFile::file("README").image_stem(), None);
    assert_eq!(ListedFile::file(".webp").image_stem(), None);
    assert_eq!(ListedFile::dir("old.webp").image_stem(), None);
}

#[test]
fn test_is_image_extension_case_insensitive() {
    assert!(is_image_extension("webp"));
    assert!(is_image_extension("WebP"));
    assert!(!is_image_extension("png"));
    assert!(!is_image_extension("jpg"));
    assert!(!is_image_extension(""));
}

#[test]
fn test_fs_source_lists_nested_dir() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("blade").join("bx");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("dran_sword.webp"), b"").unwrap();
    fs::create_dir(dir.join("drafts")).unwrap();

    let source = FsImageSource::new(tmp.path());
    let mut listed = source.list("blade/bx").unwrap();
    listed.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(
        listed,
        vec![ListedFile::dir("drafts"), ListedFile::file("dran_sword.webp")]
    );
}

#[test]
fn test_fs_source_missing_dir_is_error() {
    let tmp = TempDir::new().unwrap();
    let source = FsImageSource::new(tmp.path());
    assert!(source.list("blade/ux").is_err());
}

#[test]
fn test_fs_source_empty_dir_is_ok() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("bit").join("standard")).unwrap();
    let source = FsImageSource::new(tmp.path());
    assert!(source.list("bit/standard").unwrap().is_empty());
}
