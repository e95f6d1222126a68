use std::fs;

use tempfile::TempDir;
use wayhire_engine::{ensure_dir, write_atomic};

#[test]
fn creates_missing_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("nested").join("store");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();

    let first = write_atomic(temp.path(), "saved.json", "[]").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "[]");

    let second = write_atomic(temp.path(), "saved.json", r#"["a"]"#).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), r#"["a"]"#);

    let leftovers = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    assert!(write_atomic(&file_path, "saved.json", "[]").is_err());
    assert!(!file_path.with_file_name("saved.json").exists());
}
