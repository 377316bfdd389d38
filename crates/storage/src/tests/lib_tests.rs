use super::*;

#[tokio::test]
async fn missing_preference_reads_as_none() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    assert_eq!(storage.get("theme").await.expect("get"), None);
}

#[tokio::test]
async fn set_overwrites_previous_value() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.set("theme", "dark").await.expect("set dark");
    storage.set("theme", "light").await.expect("set light");

    assert_eq!(
        storage.get("theme").await.expect("get").as_deref(),
        Some("light")
    );

    let listed = storage.list_preferences().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].key, "theme");
    assert_eq!(listed[0].value, "light");
}

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn values_survive_reopening_the_database_file() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("prefs.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    {
        let storage = Storage::new(&database_url).await.expect("db");
        storage
            .set("accessibility-high-contrast", "true")
            .await
            .expect("set");
        storage.pool().close().await;
    }

    assert!(db_path.exists(), "database file should exist: {}", db_path.display());

    let reopened = Storage::new(&database_url).await.expect("reopen");
    assert_eq!(
        reopened
            .get("accessibility-high-contrast")
            .await
            .expect("get")
            .as_deref(),
        Some("true")
    );
}

#[tokio::test]
async fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    store.set("theme", "dark").await.expect("set");
    assert_eq!(store.get("theme").await.expect("get").as_deref(), Some("dark"));
    assert_eq!(store.snapshot().await.len(), 1);
}

#[test]
fn parses_sqlite_current_timestamp_format() {
    let parsed = parse_sqlite_timestamp("2026-10-18 09:30:00").expect("timestamp");
    assert_eq!(parsed.to_rfc3339(), "2026-10-18T09:30:00+00:00");
}
