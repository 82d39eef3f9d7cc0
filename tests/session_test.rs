//! File session store tests.

use examdesk::adapters::{FileSessionStore, Session};
use examdesk::traits::{SessionError, SessionStore};
use std::fs;

fn store_in(dir: &tempfile::TempDir) -> FileSessionStore {
    FileSessionStore::new(dir.path().join("examdesk").join("session.json"))
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.save("abc").unwrap();

    assert!(store.path().exists());
    assert_eq!(store.current_token().unwrap(), Some("abc".to_string()));
}

#[test]
fn test_saved_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("abc").unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["token"], "abc");
    assert!(doc["saved_at"].as_i64().unwrap() > 0);
}

#[test]
fn test_save_overwrites_previous_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("first").unwrap();
    store.save("second").unwrap();

    assert_eq!(store.current_token().unwrap(), Some("second".to_string()));
}

#[test]
fn test_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("abc").unwrap();

    store.clear().unwrap();
    store.clear().unwrap();

    assert_eq!(store.current_token().unwrap(), None);
    assert_eq!(store.load().unwrap(), Session::default());
}

#[test]
fn test_empty_token_reads_as_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), r#"{"token": ""}"#).unwrap();

    assert_eq!(store.current_token().unwrap(), None);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "{not json").unwrap();

    assert!(matches!(
        store.current_token(),
        Err(SessionError::Serialization(_))
    ));
}

#[cfg(unix)]
#[test]
fn test_session_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("abc").unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
