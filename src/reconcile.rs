use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::config::Config;
use crate::scan::{InstalledApp, Scanner, expand_home};
use crate::store::{Setting, SettingsStore, StoreError};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub inserted: usize,
    pub removed: usize,
    pub duplicates_removed: usize,
}

/// Merge a fresh scan into the store and return the authoritative settings list.
///
/// Rows whose path is still scanned are left untouched. Scanned apps repeating a
/// path are collapsed onto the first occurrence; stored rows repeating a path
/// keep the lowest id.
pub fn reconcile(
    store: &SettingsStore,
    apps: &[InstalledApp],
) -> Result<Vec<Setting>, StoreError> {
    let (settings, summary) = reconcile_with_summary(store, apps)?;
    info!(
        "Reconciled {} settings ({} added, {} removed, {} duplicates dropped)",
        settings.len(),
        summary.inserted,
        summary.removed,
        summary.duplicates_removed
    );
    Ok(settings)
}

pub fn reconcile_with_summary(
    store: &SettingsStore,
    apps: &[InstalledApp],
) -> Result<(Vec<Setting>, ReconcileSummary), StoreError> {
    let mut summary = ReconcileSummary::default();

    // `all()` is ordered by id, so the first row seen for a path is the oldest.
    let mut stored: HashMap<String, i64> = HashMap::new();
    for setting in store.all()? {
        if stored.contains_key(&setting.path) {
            debug!("Dropping duplicate row {} for {}", setting.id, setting.path);
            store.delete_by_id(setting.id)?;
            summary.duplicates_removed += 1;
        } else {
            stored.insert(setting.path, setting.id);
        }
    }

    let mut scanned: HashSet<&str> = HashSet::with_capacity(apps.len());
    for app in apps {
        if !scanned.insert(app.path.as_str()) {
            continue;
        }
        if !stored.contains_key(&app.path) {
            let id = store.insert_default(app)?;
            debug!("Added {} ({}) as {}", app.name, app.path, id);
            summary.inserted += 1;
        }
    }

    for path in stored.keys() {
        if !scanned.contains(path.as_str()) {
            store.delete_by_path(path)?;
            debug!("Removed stale setting for {path}");
            summary.removed += 1;
        }
    }

    Ok((store.all()?, summary))
}

/// Open the configured database, scan the configured directories and reconcile.
/// The open store is handed back for the editing session.
pub fn fetch_settings(config: &Config) -> Result<(SettingsStore, Vec<Setting>), StoreError> {
    let store = SettingsStore::open(&config.database_path())?;
    store.init()?;
    let dirs = config.app_dirs.iter().map(|d| expand_home(d)).collect();
    let apps = Scanner::new(dirs, &config.bundle_suffix).scan();
    let settings = reconcile(&store, &apps)?;
    Ok((store, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Mode;

    fn make_test_store() -> SettingsStore {
        let store = SettingsStore::open_in_memory().unwrap();
        store.init().unwrap();
        store
    }

    fn app(name: &str, path: &str) -> InstalledApp {
        InstalledApp {
            name: name.to_string(),
            path: path.to_string(),
            icon_path: format!("/icons/{name}.icns"),
        }
    }

    fn paths(settings: &[Setting]) -> Vec<&str> {
        settings.iter().map(|s| s.path.as_str()).collect()
    }

    #[test]
    fn test_inserts_new_apps_with_defaults() {
        let store = make_test_store();
        let apps = vec![app("App1", "/usr/bin/app1"), app("App2", "/usr/bin/app2")];

        let settings = reconcile(&store, &apps).unwrap();
        assert_eq!(settings.len(), 2);
        for (s, a) in settings.iter().zip(&apps) {
            assert_eq!(s.name, a.name);
            assert_eq!(s.path, a.path);
            assert_eq!(s.icon_path, a.icon_path);
            assert_eq!(s.hotkey, "");
            assert_eq!(s.mode, Mode::Default);
            assert!(s.enabled);
            assert_ne!(s.id, 0);
        }
    }

    #[test]
    fn test_removes_stale_apps() {
        let store = make_test_store();
        reconcile(
            &store,
            &[app("App1", "/a1"), app("App2", "/a2"), app("App3", "/a3")],
        )
        .unwrap();

        let settings = reconcile(&store, &[app("App2", "/a2")]).unwrap();
        assert_eq!(paths(&settings), vec!["/a2"]);
    }

    #[test]
    fn test_adds_new_and_removes_stale_together() {
        let store = make_test_store();
        reconcile(&store, &[app("App1", "/a1"), app("App2", "/a2")]).unwrap();

        let (settings, summary) =
            reconcile_with_summary(&store, &[app("App2", "/a2"), app("App3", "/a3")]).unwrap();
        assert_eq!(paths(&settings), vec!["/a2", "/a3"]);
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.removed, 1);
    }

    #[test]
    fn test_preserves_customization() {
        let store = make_test_store();
        let apps = vec![app("App1", "/a1")];
        let id = reconcile(&store, &apps).unwrap()[0].id;

        store.update_hotkey(id, "ctrl+a").unwrap();
        store.update_mode(id, Mode::Fullscreen).unwrap();
        store.update_enabled(id, false).unwrap();

        let refreshed = reconcile(&store, &apps).unwrap();
        assert_eq!(refreshed.len(), 1);
        let s = &refreshed[0];
        assert_eq!(s.id, id);
        assert_eq!(s.hotkey, "ctrl+a");
        assert_eq!(s.mode, Mode::Fullscreen);
        assert!(!s.enabled);
    }

    #[test]
    fn test_present_app_metadata_is_not_rewritten() {
        let store = make_test_store();
        reconcile(&store, &[app("Old Name", "/a1")]).unwrap();
        let settings = reconcile(&store, &[app("New Name", "/a1")]).unwrap();
        assert_eq!(settings[0].name, "Old Name");
        assert_eq!(settings[0].icon_path, "/icons/Old Name.icns");
    }

    #[test]
    fn test_idempotent_for_unchanged_scan() {
        let store = make_test_store();
        let apps = vec![app("App1", "/a1"), app("App2", "/a2")];
        let first = reconcile(&store, &apps).unwrap();
        let (second, summary) = reconcile_with_summary(&store, &apps).unwrap();
        assert_eq!(first, second);
        assert_eq!(summary, ReconcileSummary::default());
    }

    #[test]
    fn test_empty_scan_removes_everything() {
        let store = make_test_store();
        reconcile(&store, &[app("App1", "/a1"), app("App2", "/a2")]).unwrap();
        assert!(reconcile(&store, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_scanned_paths_first_wins() {
        let store = make_test_store();
        let apps = vec![
            app("App1", "/usr/bin/app1"),
            app("App1-Duplicate", "/usr/bin/app1"),
        ];
        let settings = reconcile(&store, &apps).unwrap();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].name, "App1");
        assert_eq!(settings[0].icon_path, "/icons/App1.icns");
    }

    #[test]
    fn test_duplicate_stored_rows_keep_lowest_id() {
        let store = make_test_store();
        let keep = store.insert_default(&app("App1", "/a1")).unwrap();
        let dup = store.insert_default(&app("App1 copy", "/a1")).unwrap();
        store.update_hotkey(keep, "alt+x").unwrap();

        let (settings, summary) = reconcile_with_summary(&store, &[app("App1", "/a1")]).unwrap();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].id, keep);
        assert_ne!(settings[0].id, dup);
        assert_eq!(settings[0].hotkey, "alt+x");
        assert_eq!(summary.duplicates_removed, 1);
    }

    #[test]
    fn test_large_app_list() {
        let store = make_test_store();
        let apps: Vec<InstalledApp> = (0..100)
            .map(|i| app(&format!("App{i}"), &format!("/usr/bin/app{i}")))
            .collect();
        assert_eq!(reconcile(&store, &apps).unwrap().len(), 100);
    }

    #[test]
    fn test_fetch_settings_uses_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let apps_dir = dir.path().join("Applications");
        std::fs::create_dir_all(apps_dir.join("Firefox.app")).unwrap();

        let mut config = Config::default();
        config.app_dirs = vec![
            apps_dir.to_string_lossy().to_string(),
            dir.path().join("missing").to_string_lossy().to_string(),
        ];
        config.database_path = dir
            .path()
            .join("data")
            .join("db.sqlite3")
            .to_string_lossy()
            .to_string();

        let (store, settings) = fetch_settings(&config).unwrap();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].name, "Firefox");
        drop(store);

        let (_, again) = fetch_settings(&config).unwrap();
        assert_eq!(settings, again);
    }
}
