use std::fmt::Write as _;

use tracing::{debug, info};

use crate::editor::column::Column;
use crate::editor::row::Row;
use crate::hotkey::ModifierSet;
use crate::store::{SettingsStore, StoreError};

/// One field-level edit, kept for the end-of-session report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeRecord {
    pub name: String,
    pub field: Column,
    pub old: String,
    pub new: String,
}

/// Edits made during a session.
///
/// `pending` is the set of row indices not yet written to the store (no
/// duplicates); `history` is every discrete edit in order.
#[derive(Debug, Default)]
pub struct ChangeLog {
    pending: Vec<usize>,
    history: Vec<ChangeRecord>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, row_index: usize, record: ChangeRecord) {
        if !self.pending.contains(&row_index) {
            self.pending.push(row_index);
        }
        self.history.push(record);
    }

    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    pub fn history(&self) -> &[ChangeRecord] {
        &self.history
    }

    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Write hotkey, mode and enabled for every pending row, then clear the
    /// pending set. On error the pending set is left intact.
    pub fn flush(
        &mut self,
        rows: &[Row],
        modifiers: &ModifierSet,
        store: &SettingsStore,
    ) -> Result<usize, StoreError> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        for &index in &self.pending {
            let Some(row) = rows.get(index) else {
                continue;
            };
            let hotkey = row.hotkey(modifiers);
            debug!(
                "Saving {} (id {}): hotkey={hotkey:?} mode={} enabled={}",
                row.name, row.id, row.mode, row.enabled
            );
            store.update_hotkey(row.id, &hotkey)?;
            store.update_mode(row.id, row.mode)?;
            store.update_enabled(row.id, row.enabled)?;
        }

        let written = self.pending.len();
        self.pending.clear();
        info!("Flushed {written} changed settings");
        Ok(written)
    }

    /// Human-readable summary of every recorded edit.
    pub fn report(&self) -> String {
        if self.history.is_empty() {
            return "No changes were made.\n".to_string();
        }

        let mut out = String::from("\n--- YAY Settings Changes ---\n");
        for (i, c) in self.history.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. [{}] {}: {:?} -> {:?}",
                i + 1,
                c.name,
                c.field.field_name(),
                c.old,
                c.new
            );
        }
        let _ = writeln!(out, "Total changes: {}", self.history.len());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotkey::Platform;
    use crate::scan::InstalledApp;
    use crate::store::{Mode, Setting};

    fn record(name: &str, field: Column, old: &str, new: &str) -> ChangeRecord {
        ChangeRecord {
            name: name.to_string(),
            field,
            old: old.to_string(),
            new: new.to_string(),
        }
    }

    fn seeded_store(names: &[&str]) -> (SettingsStore, Vec<Setting>) {
        let store = SettingsStore::open_in_memory().unwrap();
        store.init().unwrap();
        for name in names {
            store
                .insert_default(&InstalledApp {
                    name: name.to_string(),
                    path: format!("/apps/{name}.app"),
                    icon_path: String::new(),
                })
                .unwrap();
        }
        let settings = store.all().unwrap();
        (store, settings)
    }

    #[test]
    fn test_pending_has_no_duplicates() {
        let mut log = ChangeLog::new();
        log.record(2, record("A", Column::Mode, "default", "fullscreen"));
        log.record(2, record("A", Column::Mode, "fullscreen", "desktop"));
        log.record(0, record("B", Column::Enabled, "true", "false"));
        assert_eq!(log.pending(), &[2, 0]);
        assert_eq!(log.history().len(), 3);
    }

    #[test]
    fn test_flush_writes_rows_and_clears_pending() {
        let mods = ModifierSet::for_platform(Platform::Linux);
        let (store, settings) = seeded_store(&["Firefox", "Finder"]);
        let mut rows: Vec<Row> = settings.iter().map(|s| Row::from_setting(s, &mods)).collect();

        rows[1].modifier = Some(2);
        rows[1].key = "f".to_string();
        rows[1].mode = Mode::Desktop;
        rows[1].enabled = false;

        let mut log = ChangeLog::new();
        log.record(1, record("Finder", Column::Key, "---", "f"));

        assert_eq!(log.flush(&rows, &mods, &store).unwrap(), 1);
        assert!(!log.is_dirty());
        assert_eq!(log.history().len(), 1);

        let stored = store.all().unwrap();
        assert_eq!(stored[0].hotkey, "");
        assert_eq!(stored[1].hotkey, "ctrl+f");
        assert_eq!(stored[1].mode, Mode::Desktop);
        assert!(!stored[1].enabled);
    }

    #[test]
    fn test_flush_with_nothing_pending_is_noop() {
        let mods = ModifierSet::for_platform(Platform::Linux);
        let (store, _) = seeded_store(&["Firefox"]);
        let mut log = ChangeLog::new();
        assert_eq!(log.flush(&[], &mods, &store).unwrap(), 0);
        assert_eq!(store.all().unwrap()[0].hotkey, "");
    }

    #[test]
    fn test_flush_joins_half_empty_hotkey() {
        let mods = ModifierSet::for_platform(Platform::Linux);
        let (store, settings) = seeded_store(&["Terminal"]);
        let mut rows: Vec<Row> = settings.iter().map(|s| Row::from_setting(s, &mods)).collect();
        rows[0].key = "t".to_string();

        let mut log = ChangeLog::new();
        log.record(0, record("Terminal", Column::Key, "---", "t"));
        log.flush(&rows, &mods, &store).unwrap();
        assert_eq!(store.all().unwrap()[0].hotkey, "+t");
    }

    #[test]
    fn test_report_lists_every_change() {
        let mut log = ChangeLog::new();
        log.record(0, record("Firefox", Column::Enabled, "true", "false"));
        log.record(1, record("Finder", Column::Key, "---", "f"));

        let report = log.report();
        assert!(report.contains("  1. [Firefox] enabled: \"true\" -> \"false\"\n"));
        assert!(report.contains("  2. [Finder] key: \"---\" -> \"f\"\n"));
        assert!(report.ends_with("Total changes: 2\n"));
    }

    #[test]
    fn test_report_without_changes() {
        assert_eq!(ChangeLog::new().report(), "No changes were made.\n");
    }
}
