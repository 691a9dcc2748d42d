// ABOUTME: Integration tests for the JSON file state store
// ABOUTME: Round trips, reopen persistence, removal, and missing-file behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tempfile::TempDir;
use vitalpath::storage::{JsonFileStore, StateStore};

#[test]
fn set_get_remove_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("state.json")).unwrap();

    assert!(store.get("auth").unwrap().is_none());

    store.set("auth", "true").unwrap();
    assert_eq!(store.get("auth").unwrap().as_deref(), Some("true"));

    store.set("auth", "false").unwrap();
    assert_eq!(store.get("auth").unwrap().as_deref(), Some("false"));

    store.remove("auth").unwrap();
    assert!(store.get("auth").unwrap().is_none());
}

#[test]
fn values_survive_a_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    {
        let store = JsonFileStore::open(&path).unwrap();
        store.set("healthPlatform", "apple_health").unwrap();
        store.set("healthDataConsent", "true").unwrap();
    }

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(
        reopened.get("healthPlatform").unwrap().as_deref(),
        Some("apple_health")
    );
    assert_eq!(
        reopened.get("healthDataConsent").unwrap().as_deref(),
        Some("true")
    );
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("never-written.json")).unwrap();
    assert!(store.get("anything").unwrap().is_none());
}

#[test]
fn open_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("state.json");

    let store = JsonFileStore::open(&path).unwrap();
    store.set("k", "v").unwrap();

    assert!(path.exists());
    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn removing_a_missing_key_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    let store = JsonFileStore::open(&path).unwrap();

    store.remove("ghost").unwrap();
    // Nothing was ever written, so no file appears either
    assert!(!path.exists());
}

#[test]
fn state_file_is_plain_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    let store = JsonFileStore::open(&path).unwrap();
    store.set("healthData", r#"{"steps":9000}"#).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        doc.get("healthData").and_then(serde_json::Value::as_str),
        Some(r#"{"steps":9000}"#)
    );
}
