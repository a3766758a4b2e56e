//! Tests for the config module

use super::types::*;
use crate::error::ClonerError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_accepts_existing_directories() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("src");
    let target = dir.path().join("dst");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&target).unwrap();

    let config = WatchConfig::new(&source, &target, true, None).unwrap();

    assert_eq!(config.source(), source.canonicalize().unwrap());
    assert_eq!(config.target(), target.canonicalize().unwrap());
    assert!(config.recursive());
    assert!(config.filter().is_none());
}

#[test]
fn test_config_paths_are_absolute() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a");
    let target = dir.path().join("b");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&target).unwrap();

    // A path with a `..` component still resolves to the canonical form
    let roundabout = source.join("..").join("a");
    let config = WatchConfig::new(&roundabout, &target, false, None).unwrap();

    assert!(config.source().is_absolute());
    assert_eq!(config.source(), source.canonicalize().unwrap());
}

#[test]
fn test_config_missing_source() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("dst");
    fs::create_dir_all(&target).unwrap();

    let err = WatchConfig::new(&dir.path().join("missing"), &target, false, None).unwrap_err();
    assert!(matches!(err, ClonerError::SourceNotFound { .. }));
}

#[test]
fn test_config_missing_target() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("src");
    fs::create_dir_all(&source).unwrap();

    let err = WatchConfig::new(&source, &dir.path().join("missing"), false, None).unwrap_err();
    assert!(matches!(err, ClonerError::TargetNotFound { .. }));
}

#[test]
fn test_config_rejects_file_as_directory() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("src");
    fs::create_dir_all(&source).unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, "x").unwrap();

    let err = WatchConfig::new(&source, &file, false, None).unwrap_err();
    assert!(matches!(err, ClonerError::NotADirectory { .. }));
}

#[test]
fn test_config_invalid_filter() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("src");
    let target = dir.path().join("dst");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&target).unwrap();

    let err = WatchConfig::new(&source, &target, false, Some("(")).unwrap_err();
    assert!(matches!(err, ClonerError::InvalidFilter { .. }));
}

#[test]
fn test_config_keeps_filter_pattern() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("src");
    let target = dir.path().join("dst");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&target).unwrap();

    let config = WatchConfig::new(&source, &target, false, Some(r"\.txt$")).unwrap();
    assert_eq!(config.filter().map(|f| f.as_str()), Some(r"\.txt$"));
}

#[test]
fn test_config_rejects_same_directory() {
    let dir = tempdir().unwrap();

    let err = WatchConfig::new(dir.path(), dir.path(), false, None).unwrap_err();
    assert!(matches!(err, ClonerError::TargetInsideSource { .. }));
}

#[test]
fn test_config_nested_target_only_rejected_when_recursive() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("mirror");
    fs::create_dir_all(&target).unwrap();

    assert!(WatchConfig::new(dir.path(), &target, false, None).is_ok());

    let err = WatchConfig::new(dir.path(), &target, true, None).unwrap_err();
    assert!(matches!(err, ClonerError::TargetInsideSource { .. }));
}
