use std::fs;
use std::path::Path;

use rusqlite::{Connection, Row, params};
use tracing::{debug, warn};

use crate::scan::InstalledApp;
use crate::store::StoreError;
use crate::store::schema::{CREATE_SETTINGS_TABLE, Mode, Setting};

/// Single-table store of per-application settings.
///
/// Exactly one process writes to the database and calls are never interleaved,
/// so individual statements run in autocommit mode.
pub struct SettingsStore {
    conn: Connection,
}

impl SettingsStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        debug!("Opening settings database at {}", path.display());
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Create the settings table if it does not exist yet. Safe to call repeatedly.
    pub fn init(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(CREATE_SETTINGS_TABLE)?;
        Ok(())
    }

    /// All rows, ordered by id.
    pub fn all(&self) -> Result<Vec<Setting>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, path, icon_path, hotkey, mode, enabled FROM settings ORDER BY id",
        )?;
        let rows = stmt.query_map([], decode_row)?;
        let mut settings = Vec::new();
        for row in rows {
            settings.push(row?);
        }
        Ok(settings)
    }

    /// Insert a row for `app` with an empty hotkey, default mode and enabled.
    /// Returns the id assigned by the database.
    pub fn insert_default(&self, app: &InstalledApp) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO settings (name, path, icon_path, hotkey, mode, enabled) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                app.name,
                app.path,
                app.icon_path,
                "",
                Mode::Default.as_str(),
                true
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns the number of rows removed.
    pub fn delete_by_path(&self, path: &str) -> Result<usize, StoreError> {
        Ok(self
            .conn
            .execute("DELETE FROM settings WHERE path = ?1", params![path])?)
    }

    pub fn delete_by_id(&self, id: i64) -> Result<usize, StoreError> {
        Ok(self
            .conn
            .execute("DELETE FROM settings WHERE id = ?1", params![id])?)
    }

    pub fn update_hotkey(&self, id: i64, hotkey: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE settings SET hotkey = ?1 WHERE id = ?2",
            params![hotkey, id],
        )?;
        Ok(())
    }

    pub fn update_mode(&self, id: i64, mode: Mode) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE settings SET mode = ?1 WHERE id = ?2",
            params![mode.as_str(), id],
        )?;
        Ok(())
    }

    pub fn update_enabled(&self, id: i64, enabled: bool) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE settings SET enabled = ?1 WHERE id = ?2",
            params![enabled, id],
        )?;
        Ok(())
    }
}

fn decode_row(row: &Row<'_>) -> rusqlite::Result<Setting> {
    let id: i64 = row.get(0)?;
    let mode_text: Option<String> = row.get(5)?;
    let mode = match mode_text.as_deref() {
        None | Some("") => Mode::Default,
        Some(text) => Mode::parse(text).unwrap_or_else(|| {
            warn!("Unknown mode {text:?} for setting {id}, using default");
            Mode::Default
        }),
    };

    Ok(Setting {
        id,
        name: row.get(1)?,
        path: row.get(2)?,
        icon_path: row.get(3)?,
        hotkey: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        mode,
        enabled: row.get::<_, Option<bool>>(6)?.unwrap_or(true),
    })
}
