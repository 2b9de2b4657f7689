use predicates::prelude::*;
use serde_json::json;

use crate::common::TestEnv;

#[test]
fn network_scope_discovery_skips_tenant_files() {
    let env = TestEnv::new();
    env.enable_multi_tenant();
    env.write_bundle_file(
        "network-settings.json",
        r#"{".label": "Settings", "site_name": "network value"}"#,
    );
    env.write_bundle_file(
        "tenant5-settings.json",
        r#"{".label": "Settings", "site_name": "tenant value"}"#,
    );

    env.cmd()
        .args(["pull", "all", "--network"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings: pulled"));

    assert_eq!(env.registry()["site_name"]["value"], json!("network value"));
}

#[test]
fn tenant_scope_discovery_only_sees_its_own_files() {
    let env = TestEnv::new();
    env.enable_multi_tenant();
    env.write_bundle_file("tenant5-settings.json", r#"{".label": "Five"}"#);
    env.write_bundle_file("tenant7-extras.json", r#"{".label": "Seven"}"#);
    env.write_bundle_file("network-settings.json", r#"{".label": "Net"}"#);

    env.cmd()
        .args(["bundles", "--tenant", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("extras (Seven) [file]"))
        .stdout(predicate::str::contains("settings").not());
}

#[test]
fn multi_tenant_push_writes_prefixed_filename() {
    let env = TestEnv::new();
    env.enable_multi_tenant();
    env.write_registry(r#"{"site_name": {"value": "Acme", "group": "options"}}"#);
    env.write_catalogue(
        r#"{"bundles": [{"name": "settings", "label": "Settings", "config": ["site_name"]}]}"#,
    );

    env.cmd()
        .args(["push", "settings", "--tenant", "5"])
        .assert()
        .success();

    assert!(env.bundle_path("tenant5-settings.json").exists());
    assert!(!env.bundle_path("settings.json").exists());
}

#[test]
fn multi_tenant_operation_without_tenant_id_fails() {
    let env = TestEnv::new();
    env.enable_multi_tenant();

    env.cmd()
        .args(["pull", "settings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tenant id"));
}

#[test]
fn configured_tenant_id_is_the_default_scope() {
    let env = TestEnv::new();
    env.enable_multi_tenant();
    env.cmd()
        .args(["config", "set", "tenant_id", "5"])
        .assert()
        .success();
    env.write_bundle_file(
        "tenant5-settings.json",
        r#"{".label": "Settings", "site_name": "Acme"}"#,
    );

    env.cmd()
        .args(["pull", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings: pulled"));
}

#[test]
fn single_tenant_deployment_ignores_scope_prefixes() {
    let env = TestEnv::new();
    env.write_bundle_file("network-settings.json", r#"{".label": "Net"}"#);

    // Without multi_tenant the whole filename is the bundle name.
    env.cmd()
        .args(["bundles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("network-settings (Net) [file]"));
}
