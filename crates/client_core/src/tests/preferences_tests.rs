use super::*;
use async_trait::async_trait;
use storage::MemoryStore;

struct ReadOnlyStore;

#[async_trait]
impl PreferenceStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set(&self, key: &str, _value: &str) -> Result<()> {
        Err(anyhow::anyhow!("preference store is read-only: {key}"))
    }
}

#[tokio::test]
async fn empty_store_loads_documented_defaults() {
    let store = MemoryStore::new();
    let prefs = AccessibilityPreferences::load(&store).await.expect("load");
    assert!(!prefs.high_contrast);
    assert_eq!(prefs.theme, Theme::Light);
}

#[tokio::test]
async fn unrecognised_stored_values_fall_back_to_defaults() {
    let store = MemoryStore::new();
    store.set(HIGH_CONTRAST_KEY, "yes").await.expect("seed");
    store.set(THEME_KEY, "sepia").await.expect("seed");

    let prefs = AccessibilityPreferences::load(&store).await.expect("load");
    assert_eq!(prefs, AccessibilityPreferences::default());
}

#[tokio::test]
async fn toggles_persist_the_new_value() {
    let store = MemoryStore::new();
    let mut prefs = AccessibilityPreferences::load(&store).await.expect("load");

    assert!(prefs.toggle_contrast(&store).await.expect("contrast"));
    assert_eq!(prefs.toggle_theme(&store).await.expect("theme"), Theme::Dark);

    assert_eq!(
        store.get(HIGH_CONTRAST_KEY).await.expect("get").as_deref(),
        Some("true")
    );
    assert_eq!(store.get(THEME_KEY).await.expect("get").as_deref(), Some("dark"));

    let reloaded = AccessibilityPreferences::load(&store).await.expect("reload");
    assert_eq!(reloaded, prefs);
}

#[tokio::test]
async fn storage_reflects_the_last_write_after_repeated_toggles() {
    let store = MemoryStore::new();
    let mut prefs = AccessibilityPreferences::default();

    for _ in 0..3 {
        prefs.toggle_contrast(&store).await.expect("contrast");
    }
    assert_eq!(
        store.get(HIGH_CONTRAST_KEY).await.expect("get").as_deref(),
        Some("true")
    );

    prefs.toggle_contrast(&store).await.expect("contrast");
    assert_eq!(
        store.get(HIGH_CONTRAST_KEY).await.expect("get").as_deref(),
        Some("false")
    );
    assert!(!AccessibilityPreferences::load(&store).await.expect("load").high_contrast);
}

#[tokio::test]
async fn failed_write_keeps_the_in_memory_flag() {
    let mut prefs = AccessibilityPreferences::default();
    assert!(prefs.toggle_theme(&ReadOnlyStore).await.is_err());
    assert_eq!(prefs.theme, Theme::Light);
}
