use super::*;

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_match_catalog_and_tracker() {
    let settings = Settings::default();
    assert_eq!(settings.catalog_latency(), CatalogLatency::default());
    assert_eq!(settings.tracker_goal_sqft, 500.0);
    assert_eq!(settings.database_url, "sqlite://./data/nativebloom.db");
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
database_url = "sqlite::memory:"
native_latency_ms = 0
tracker_goal_sqft = 1200.5
"#,
    )
    .expect("valid toml");

    assert_eq!(settings.database_url, "sqlite::memory:");
    assert_eq!(settings.native_latency_ms, 0);
    assert_eq!(settings.invasive_latency_ms, 1200);
    assert_eq!(settings.tracker_goal_sqft, 1200.5);
}

#[test]
fn unknown_file_keys_are_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "bind_addr = \"0.0.0.0:1\"").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_product_prefix() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[
            ("NATIVEBLOOM_DATABASE_URL", "sqlite://./first.db"),
            ("APP__DATABASE_URL", "sqlite://./second.db"),
            ("APP__INVASIVE_LATENCY_MS", "5"),
        ]),
    );
    assert_eq!(settings.database_url, "sqlite://./second.db");
    assert_eq!(settings.invasive_latency_ms, 5);
}

#[test]
fn unparsable_env_numbers_are_ignored() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[
            ("APP__NATIVE_LATENCY_MS", "fast"),
            ("APP__TRACKER_GOAL_SQFT", "a lot"),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn explicit_config_file_is_read_and_must_exist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "invasive_latency_ms = 42\n").expect("write config");

    let settings = load_settings(Some(&path)).expect("load");
    assert_eq!(settings.invasive_latency_ms, 42);

    let missing = dir.path().join("missing.toml");
    assert!(load_settings(Some(&missing)).is_err());
}

#[test]
fn normalizes_plain_file_path_to_sqlite_url() {
    assert_eq!(
        normalize_database_url("./data/test.db"),
        "sqlite://./data/test.db"
    );
    assert_eq!(
        normalize_database_url("sqlite:data\\test.db"),
        "sqlite://data/test.db"
    );
}

#[test]
fn keeps_memory_and_full_urls() {
    assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
    assert_eq!(
        normalize_database_url(" sqlite://./x.db?mode=rwc "),
        "sqlite://./x.db?mode=rwc"
    );
    assert_eq!(
        normalize_database_url("   "),
        Settings::default().database_url
    );
}

#[test]
fn sqlite_file_skips_memory_and_query_strings() {
    assert_eq!(sqlite_file("sqlite::memory:"), None);
    assert_eq!(sqlite_file("postgres://db/prefs"), None);
    assert_eq!(sqlite_file("sqlite://"), None);
    assert_eq!(
        sqlite_file("sqlite://./data/prefs.db?mode=rwc"),
        Some(Path::new("./data/prefs.db"))
    );
}

#[test]
fn preparing_memory_url_touches_no_files() {
    assert_eq!(
        prepare_database_url("sqlite::memory:").expect("prepare"),
        "sqlite::memory:"
    );
}

#[tokio::test]
async fn prepared_url_opens_storage_in_nested_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("nested").join("prefs.db");

    let url = prepare_database_url(db_path.to_string_lossy().as_ref()).expect("prepare");
    assert!(dir.path().join("nested").is_dir());
    let storage = storage::Storage::new(&url).await.expect("open sqlite");
    storage.health_check().await.expect("ping");
    drop(storage);

    assert!(db_path.exists(), "{}", db_path.display());
}
