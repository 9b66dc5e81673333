use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use tracing::error;

use crate::editor::{Editor, Outcome};
use crate::hotkey::ModifierSet;
use crate::store::{Setting, SettingsStore};
use crate::ui::theme::Theme;

pub struct App {
    pub editor: Editor,
    pub store: SettingsStore,
    pub theme: Theme,
    pub version: &'static str,
    /// Message from the last failed flush, cleared by the next successful one.
    pub last_error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: &[Setting], store: SettingsStore, theme: Theme) -> Self {
        Self {
            editor: Editor::new(settings, ModifierSet::current()),
            store,
            theme,
            version: env!("CARGO_PKG_VERSION"),
            last_error: None,
            should_quit: false,
        }
    }

    /// Feed one key press to the editor and carry out the storage effect it asks for.
    ///
    /// A failed flush while editing is reported on the status line and retried
    /// at the next flush; a failed flush on quit is returned.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.editor.handle_key(key) {
            Outcome::Continue => {}
            Outcome::Flush => {
                if let Err(e) = self.flush() {
                    error!("Saving settings failed: {e:#}");
                    self.last_error = Some(format!("save failed: {e:#}"));
                }
            }
            Outcome::Quit => {
                self.should_quit = true;
                self.flush()?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<usize> {
        let editor = &mut self.editor;
        let written = editor
            .changes
            .flush(&editor.rows, &editor.modifiers, &self.store)
            .context("writing settings to the database")?;
        self.last_error = None;
        Ok(written)
    }

    pub fn report(&self) -> String {
        self.editor.changes.report()
    }
}
