use predicates::prelude::*;
use serde_json::json;

use crate::common::TestEnv;

#[test]
fn push_writes_bundle_document_with_label() {
    let env = TestEnv::new();
    env.write_registry(r#"{"site_name": {"value": "Acme", "group": "options"}}"#);
    env.write_catalogue(
        r#"{"bundles": [{"name": "settings", "label": "Settings", "config": ["site_name"]}]}"#,
    );

    env.cmd()
        .args(["push", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings: written to file"));

    let written = std::fs::read_to_string(env.bundle_path("settings.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, json!({".label": "Settings", "site_name": "Acme"}));
}

#[test]
fn push_unknown_bundle_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["push", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn push_then_pull_restores_registry_values() {
    let env = TestEnv::new();
    env.write_registry(r#"{"site_name": {"value": "Acme", "group": "options"}}"#);
    env.write_catalogue(
        r#"{"bundles": [{"name": "settings", "label": "Settings", "config": ["site_name"]}]}"#,
    );

    env.cmd().args(["push", "settings"]).assert().success();

    // Tamper with the registry, then pull the pushed file back.
    env.write_registry(r#"{"site_name": {"value": "Tampered", "group": "options"}}"#);
    env.cmd().args(["pull", "settings"]).assert().success();

    assert_eq!(env.registry()["site_name"]["value"], json!("Acme"));
}

#[test]
fn push_to_destination_folder_records_the_path() {
    let env = TestEnv::new();
    env.write_registry(r#"{"site_name": {"value": "Acme", "group": "options"}}"#);
    env.write_catalogue(
        r#"{"bundles": [{"name": "settings", "label": "Settings", "config": ["site_name"]}]}"#,
    );

    env.cmd()
        .args(["push", "settings", "--destination", "deploy"])
        .assert()
        .success();

    assert!(env.base_dir.path().join("deploy/settings.json").exists());
    assert!(env.catalogue().contains("\"deploy\""));
}

#[test]
fn push_all_covers_file_discovered_bundles() {
    let env = TestEnv::new();
    env.write_registry(r#"{"site_name": {"value": "Acme", "group": "options"}}"#);
    env.write_bundle_file(
        "settings.json",
        r#"{".label": "Settings", "site_name": "stale"}"#,
    );

    env.cmd()
        .args(["push", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings: written to file"));

    // The file-discovered member keys are re-read from the registry.
    let written = std::fs::read_to_string(env.bundle_path("settings.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["site_name"], json!("Acme"));
}
