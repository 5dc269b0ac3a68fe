// Integration suite for the resource selection validator: the merchant
// scenarios a settings page runs through, the process-wide catalog store, file
// loading, and the CLI.

use anyhow::Result;
use assert_cmd::Command;
use infracheck::{
    CatalogStore, NetworkConfig, ResourceCatalog, ResourceDefinition, ResourceId, ResourceType,
    available_resource_ids, builtin_catalog, can_use_resource, dependency_errors, get_catalog,
    has_required_dependencies, is_configured, is_element_configured, load_catalog_from_path,
    reset_catalog, set_catalog, validate_selection, validator,
};
use serde_json::{Value, json};
use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::NamedTempFile;

const SHOP_SELECTION: [&str; 4] = ["filecoin-files", "he-dns", "real-cdn", "smtp-email"];

fn full_config() -> NetworkConfig {
    NetworkConfig::from_iter([
        ("filecoinPrivkey", "f1-private-key"),
        ("heheUser", "shop-owner"),
        ("hehePassword", "dns-secret"),
        ("rcdnKey", "cdn-key"),
        ("rcdnSecret", "cdn-secret"),
        ("smtpHost", "mail.example.com"),
        ("smtpUser", "shop-owner"),
        ("smtpPassword", "smtp-secret"),
    ])
}

// Tests that touch the process-wide store hold this guard.
fn global_store_guard() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let mutex = LOCK.get_or_init(|| Mutex::new(()));
    mutex.lock().unwrap_or_else(|err| err.into_inner())
}

fn write_json(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    Ok(file)
}

// === end-to-end merchant scenarios ===

#[test]
fn fully_configured_shop_is_valid() {
    let catalog = builtin_catalog();
    let config = full_config();

    let available = available_resource_ids(&catalog, &config);
    let expected: Vec<ResourceId> = SHOP_SELECTION.iter().map(|id| ResourceId::from(*id)).collect();
    assert_eq!(available, expected);

    let result = validate_selection(&catalog, &config, &SHOP_SELECTION);
    assert!(result.success);
    assert!(result.errors.is_empty());
}

#[test]
fn missing_smtp_password_flags_email_only() {
    let mut config = full_config();
    config.remove("smtpPassword");

    let result = validate_selection(&builtin_catalog(), &config, &SHOP_SELECTION);
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("smtp-email"));
}

#[test]
fn unknown_email_provider_is_reported_once() {
    let selection = ["filecoin-files", "he-dns", "real-cdn", "invalid-email"];
    let result = validate_selection(&builtin_catalog(), &full_config(), &selection);
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].matches("invalid-email").count(), 1);
}

#[test]
fn cdn_without_dns_names_the_missing_provider() {
    let result = validate_selection(
        &builtin_catalog(),
        &full_config(),
        &["filecoin-files", "real-cdn"],
    );
    assert!(!result.success);
    assert_eq!(result.errors, vec!["Real CDN requires Hurricane Electric DNS".to_string()]);
}

#[test]
fn every_unknown_id_appears_exactly_once() {
    let selection = ["alpha", "he-dns", "beta", "alpha", "gamma"];
    let result = validate_selection(&builtin_catalog(), &full_config(), &selection);
    assert_eq!(result.errors.len(), 1);
    for id in ["alpha", "beta", "gamma"] {
        assert_eq!(result.errors[0].matches(id).count(), 1, "{id} should be listed once");
    }
}

// === checker properties ===

#[test]
fn unsupported_resources_never_configured() {
    let catalog = builtin_catalog();
    let mut config = full_config();
    for key in ["awsAccessKeyId", "awsSecretAccessKey", "awsRegion"] {
        config.insert(key, "value");
    }
    for resource in catalog.iter().filter(|resource| !resource.supported) {
        assert!(!is_configured(&catalog, &config, resource.id.as_str()));
        assert!(!can_use_resource(&catalog, &config, &[resource.id.as_str()], resource.id.as_str()));
    }
}

#[test]
fn configuration_is_monotonic_in_config_keys() {
    let catalog = builtin_catalog();
    let mut config = full_config();
    let configured: Vec<&ResourceDefinition> = catalog
        .iter()
        .filter(|resource| is_element_configured(resource, &config))
        .collect();
    assert!(!configured.is_empty());

    config.insert("extraKey", "extra");
    config.insert("anotherKey", json!({ "nested": true }));
    for resource in configured {
        assert!(is_element_configured(resource, &config), "{} lost config", resource.id);
    }
}

#[test]
fn dependency_check_matches_edge_membership() {
    let catalog = ResourceCatalog::new(vec![
        ResourceDefinition::new("a", "A", ResourceType::Cdn).depends_on(["b"]),
        ResourceDefinition::new("b", "B", ResourceType::Dns),
        ResourceDefinition::new("c", "C", ResourceType::Email),
    ]);
    let selections: [&[&str]; 6] = [&[], &["a"], &["b"], &["a", "b"], &["a", "c"], &["c", "b"]];
    for selection in selections {
        let a_in = selection.contains(&"a");
        let b_in = selection.contains(&"b");
        assert_eq!(
            has_required_dependencies(&catalog, selection),
            !(a_in && !b_in),
            "selection {selection:?}"
        );
        assert_eq!(dependency_errors(&catalog, selection).is_empty(), !(a_in && !b_in));
    }
}

// === catalog store ===

#[test]
fn global_store_defaults_and_swaps() {
    let _guard = global_store_guard();
    reset_catalog();
    assert_eq!(*get_catalog(), builtin_catalog());

    let custom = ResourceCatalog::new(vec![
        ResourceDefinition::new("open-dns", "Open DNS", ResourceType::Dns),
    ]);
    set_catalog(Some(custom.clone()));
    assert_eq!(*get_catalog(), custom);

    let config = NetworkConfig::new();
    let result = validator(&config).validate(&["open-dns", "he-dns"]);
    assert_eq!(result.errors, vec!["Invalid resources selected: he-dns".to_string()]);

    set_catalog(None);
    assert_eq!(*get_catalog(), builtin_catalog());
}

#[test]
fn validator_keeps_its_snapshot_across_swaps() {
    let _guard = global_store_guard();
    reset_catalog();
    let config = full_config();
    let pinned = validator(&config);

    set_catalog(Some(ResourceCatalog::default()));
    assert!(pinned.validate(&SHOP_SELECTION).success);
    reset_catalog();
}

#[test]
fn independent_stores_do_not_interfere() {
    let left = CatalogStore::with_catalog(ResourceCatalog::default());
    let right = CatalogStore::new();
    assert!(left.get().is_empty());
    assert_eq!(*right.get(), builtin_catalog());
}

// === catalog files ===

#[test]
fn loads_catalog_file_with_defaults() -> Result<()> {
    let file = write_json(&json!({
        "resources": [
            { "id": "bunny-cdn", "name": "Bunny CDN", "type": "cdn", "depends": ["cf-dns"], "requiresConfig": ["bunnyKey"] },
            { "id": "cf-dns", "name": "Cloudflare DNS", "type": "dns" }
        ]
    }))?;
    let catalog = load_catalog_from_path(file.path())?;
    assert_eq!(catalog.len(), 2);

    let config = NetworkConfig::from_iter([("bunnyKey", "k")]);
    assert!(validate_selection(&catalog, &config, &["bunny-cdn", "cf-dns"]).success);
    assert_eq!(
        validate_selection(&catalog, &config, &["bunny-cdn"]).errors,
        vec!["Bunny CDN requires Cloudflare DNS".to_string()]
    );
    Ok(())
}

#[test]
fn rejects_catalog_file_with_bad_shape() -> Result<()> {
    let file = write_json(&json!([{ "id": "x", "name": "X", "type": "dns", "supported": "yes" }]))?;
    let err = load_catalog_from_path(file.path()).expect_err("string supported flag is invalid");
    assert!(format!("{err:#}").contains("schema validation"));
    Ok(())
}

// === CLI ===

#[test]
fn cli_validate_succeeds_for_complete_shop() -> Result<()> {
    let config = write_json(&serde_json::to_value(full_config())?)?;
    let output = Command::cargo_bin("infracheck")?
        .env_remove("INFRACHECK_CATALOG")
        .arg("validate")
        .arg("--config")
        .arg(config.path())
        .args(SHOP_SELECTION)
        .output()?;
    assert!(output.status.success());
    let result: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(result, json!({ "success": true, "errors": [] }));
    Ok(())
}

#[test]
fn cli_validate_exits_nonzero_with_errors() -> Result<()> {
    let config = write_json(&json!({}))?;
    let output = Command::cargo_bin("infracheck")?
        .env_remove("INFRACHECK_CATALOG")
        .arg("validate")
        .arg("--config")
        .arg(config.path())
        .arg("smtp-email")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let result: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(result["success"], json!(false));
    assert_eq!(result["errors"], json!(["smtp-email is not configured"]));
    Ok(())
}

#[test]
fn cli_available_honors_catalog_env() -> Result<()> {
    let catalog = write_json(&json!([
        { "id": "local-files", "name": "Local files", "type": "storage" },
        { "id": "paid-files", "name": "Paid files", "type": "storage", "requiresConfig": ["token"] }
    ]))?;
    let config = write_json(&json!({ "token": "" }))?;
    let output = Command::cargo_bin("infracheck")?
        .env("INFRACHECK_CATALOG", catalog.path())
        .arg("available")
        .arg("--config")
        .arg(config.path())
        .output()?;
    assert!(output.status.success());
    let ids: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(ids, json!(["local-files"]));
    Ok(())
}

#[test]
fn cli_lint_flags_dangling_dependency() -> Result<()> {
    let catalog = write_json(&json!([
        { "id": "cdn", "name": "CDN", "type": "cdn", "depends": ["nowhere"] }
    ]))?;
    let output = Command::cargo_bin("infracheck")?
        .arg("--catalog")
        .arg(catalog.path())
        .arg("lint")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        report["problems"],
        json!(["resource 'cdn' depends on unknown resource 'nowhere'"])
    );
    Ok(())
}

#[test]
fn cli_reports_unreadable_config() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.json");
    let output = Command::cargo_bin("infracheck")?
        .arg("validate")
        .arg("--config")
        .arg(&missing)
        .arg("he-dns")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.json"), "stderr was: {stderr}");
    Ok(())
}
