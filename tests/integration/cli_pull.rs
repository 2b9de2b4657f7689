use predicates::prelude::*;
use serde_json::json;

use crate::common::TestEnv;

#[test]
fn pull_imports_file_and_creates_catalogue_entry() {
    let env = TestEnv::new();
    env.write_bundle_file(
        "settings.json",
        r#"{".label": "Settings", "site_name": "Acme"}"#,
    );

    env.cmd()
        .args(["pull", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings: pulled"));

    assert_eq!(env.registry()["site_name"]["value"], json!("Acme"));

    let catalogue = env.catalogue();
    assert!(catalogue.contains("\"settings\""));
    assert!(catalogue.contains("\"Settings\""));
    assert!(catalogue.contains("\"site_name\""));
}

#[test]
fn pull_missing_bundle_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["pull", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn pull_all_imports_every_valid_bundle_file() {
    let env = TestEnv::new();
    env.write_bundle_file("one.json", r#"{".label": "One", "a": 1}"#);
    env.write_bundle_file("two.json", r#"{".label": "Two", "b": 2}"#);
    env.write_bundle_file("not_a_bundle.json", r#"{"c": 3}"#);

    env.cmd()
        .args(["pull", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one: pulled"))
        .stdout(predicate::str::contains("two: pulled"))
        .stdout(predicate::str::contains("not_a_bundle").not());

    let registry = env.registry();
    assert_eq!(registry["a"]["value"], json!(1));
    assert_eq!(registry["b"]["value"], json!(2));
    assert!(registry.get("c").is_none());
}

#[test]
fn pull_all_with_nothing_to_do_succeeds() {
    let env = TestEnv::new();

    env.cmd()
        .args(["pull", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bundles to process"));
}

#[test]
fn pull_from_source_folder_records_the_path() {
    let env = TestEnv::new();
    let staging = env.base_dir.path().join("staging");
    std::fs::create_dir_all(&staging).unwrap();
    std::fs::write(
        staging.join("settings.json"),
        r#"{".label": "Settings", "site_name": "Acme"}"#,
    )
    .unwrap();

    env.cmd()
        .args(["pull", "settings", "--source", "staging"])
        .assert()
        .success();

    assert!(env.catalogue().contains("\"staging\""));
}

#[test]
fn pull_rejects_absolute_source() {
    let env = TestEnv::new();

    env.cmd()
        .args(["pull", "settings", "--source", "/etc/config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("relative to the base directory"));
}
