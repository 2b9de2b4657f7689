use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn bundles_lists_provenance_for_each_store() {
    let env = TestEnv::new();
    env.write_catalogue(
        r#"{"bundles": [{"name": "db_bundle", "label": "In DB", "config": ["k"]}]}"#,
    );
    env.write_bundle_file(
        "file_bundle.json",
        r#"{".label": "In file", "site_name": "Acme"}"#,
    );

    env.cmd()
        .args(["bundles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("db_bundle (In DB) [db]"))
        .stdout(predicate::str::contains("file_bundle (In file) [file]"));
}

#[test]
fn bundles_in_both_stores_show_merged_provenance() {
    let env = TestEnv::new();
    env.write_catalogue(
        r#"{"bundles": [{"name": "settings", "label": "Settings", "config": ["site_name"]}]}"#,
    );
    env.write_bundle_file(
        "settings.json",
        r#"{".label": "Other label", "site_name": "Acme"}"#,
    );

    env.cmd()
        .args(["bundles"])
        .assert()
        .success()
        // Catalogue metadata is authoritative for display.
        .stdout(predicate::str::contains("settings (Settings) [db+file]"));
}

#[test]
fn bundles_with_empty_stores_prints_notice() {
    let env = TestEnv::new();

    env.cmd()
        .args(["bundles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bundles found"));
}

#[test]
fn malformed_catalogue_record_is_tolerated() {
    let env = TestEnv::new();
    env.write_catalogue("{definitely not json");
    env.write_bundle_file("settings.json", r#"{".label": "Settings"}"#);

    env.cmd()
        .args(["bundles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings (Settings) [file]"));
}

#[test]
fn show_displays_file_and_registry_values() {
    let env = TestEnv::new();
    env.write_registry(r#"{"site_name": {"value": "Acme", "group": "options"}}"#);
    env.write_catalogue(
        r#"{"bundles": [{"name": "settings", "label": "Settings", "config": ["site_name"]}]}"#,
    );
    env.write_bundle_file(
        "settings.json",
        r#"{".label": "Settings", "site_name": "Acme2"}"#,
    );

    env.cmd()
        .args(["show", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"site_name: file="Acme2", registry="Acme""#,
        ));
}

#[test]
fn show_unknown_bundle_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["show", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn items_are_grouped() {
    let env = TestEnv::new();
    env.write_registry(
        r#"{
            "site_name": {"value": "Acme", "group": "options"},
            "smtp_host": {"value": "mail.acme.test", "group": "mail"}
        }"#,
    );

    env.cmd()
        .args(["items"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mail:"))
        .stdout(predicate::str::contains("smtp_host"))
        .stdout(predicate::str::contains("options:"))
        .stdout(predicate::str::contains("site_name"));
}
