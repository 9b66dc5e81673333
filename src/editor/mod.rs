pub mod capture;
pub mod changes;
pub mod column;
pub mod filter;
pub mod row;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::hotkey::ModifierSet;
use crate::store::Setting;
use crate::ui::line_input::{InputResult, LineInput};

use capture::CaptureOutcome;
pub use changes::{ChangeLog, ChangeRecord};
pub use column::Column;
use row::{CLEARED, RECORDING, UNSET};
pub use row::{Row, ViewRow};

/// Which part of the editor receives key presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Browse,
    Search,
    Row(Column),
    /// Waiting for the next key press to use as the key of the focused row.
    /// Only reachable from `Row(Column::Key)`.
    Capture,
}

/// What the caller must do after a key press has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Row focus was left; write pending changes to the store.
    Flush,
    /// End the session after writing pending changes.
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Nav {
    Up,
    Down,
    First,
    Last,
}

/// Editing state for one terminal session. Performs no I/O: storage effects are
/// requested through [`Outcome`].
pub struct Editor {
    pub rows: Vec<Row>,
    pub focus: Focus,
    /// Indices into `rows` matching the search query, in original order.
    pub visible: Vec<usize>,
    /// Position within `visible`.
    pub cursor: usize,
    pub search: LineInput,
    pub changes: ChangeLog,
    pub modifiers: ModifierSet,
}

impl Editor {
    pub fn new(settings: &[Setting], modifiers: ModifierSet) -> Self {
        let rows: Vec<Row> = settings
            .iter()
            .map(|s| Row::from_setting(s, &modifiers))
            .collect();
        let mut editor = Self {
            rows,
            focus: Focus::Browse,
            visible: Vec::new(),
            cursor: 0,
            search: LineInput::default(),
            changes: ChangeLog::new(),
            modifiers,
        };
        editor.refilter();
        editor
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Outcome::Quit;
        }

        match self.focus {
            Focus::Browse => self.handle_browse_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::Row(column) => self.handle_row_key(column, key),
            Focus::Capture => self.handle_capture_key(key),
        }
    }

    /// Index into `rows` of the row under the cursor.
    pub fn selected(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    pub fn focused_column(&self) -> Option<Column> {
        match self.focus {
            Focus::Row(column) => Some(column),
            Focus::Capture => Some(Column::Key),
            Focus::Browse | Focus::Search => None,
        }
    }

    /// Display rows for the visible set, in order.
    pub fn view_rows(&self) -> Vec<ViewRow> {
        let selected = self.selected();
        self.visible
            .iter()
            .map(|&i| {
                let mut view = self.rows[i].view(&self.modifiers);
                if self.focus == Focus::Capture && selected == Some(i) {
                    view.key = RECORDING.to_string();
                }
                view
            })
            .collect()
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Outcome {
        if let Some(nav) = nav_for(&key, true) {
            self.navigate(nav);
            return Outcome::Continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Outcome::Quit,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Enter => self.focus_row(),
            _ => {}
        }
        Outcome::Continue
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Outcome {
        if let Some(nav) = nav_for(&key, false) {
            self.navigate(nav);
            return Outcome::Continue;
        }
        match self.search.handle(key) {
            InputResult::Cancel => self.focus = Focus::Browse,
            InputResult::Submit => self.focus_row(),
            InputResult::Changed => self.refilter(),
            InputResult::Continue => {}
        }
        Outcome::Continue
    }

    fn handle_row_key(&mut self, column: Column, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Esc => {
                self.focus = Focus::Browse;
                return Outcome::Flush;
            }
            KeyCode::Tab => {
                self.focus = Focus::Row(column.next());
                return Outcome::Continue;
            }
            KeyCode::BackTab => {
                self.focus = Focus::Row(column.prev());
                return Outcome::Continue;
            }
            _ => {}
        }
        if let Some(nav) = nav_for(&key, true) {
            self.navigate(nav);
            return Outcome::Continue;
        }

        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
        let forward = activate || matches!(key.code, KeyCode::Right | KeyCode::Char('l'));
        let backward = matches!(key.code, KeyCode::Left | KeyCode::Char('h'));

        match column {
            Column::Modifier => {
                if forward {
                    self.cycle_modifier(true);
                } else if backward {
                    self.cycle_modifier(false);
                } else if matches!(key.code, KeyCode::Backspace | KeyCode::Delete) {
                    self.clear_modifier();
                }
            }
            Column::Key => {
                if activate && self.selected().is_some() {
                    self.focus = Focus::Capture;
                }
            }
            Column::Mode => {
                if forward {
                    self.cycle_mode(true);
                } else if backward {
                    self.cycle_mode(false);
                }
            }
            Column::Enabled => {
                if activate {
                    self.toggle_enabled();
                }
            }
        }
        Outcome::Continue
    }

    fn handle_capture_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Tab => {
                self.focus = Focus::Row(Column::Key.next());
                return Outcome::Continue;
            }
            KeyCode::BackTab => {
                self.focus = Focus::Row(Column::Key.prev());
                return Outcome::Continue;
            }
            _ => {}
        }

        match capture::interpret(key) {
            CaptureOutcome::Ignored => return Outcome::Continue,
            CaptureOutcome::Cancel => {}
            CaptureOutcome::Clear => self.clear_key(),
            CaptureOutcome::Captured(name) => self.set_key(name),
        }
        self.focus = Focus::Row(Column::Key);
        Outcome::Continue
    }

    fn focus_row(&mut self) {
        if !self.visible.is_empty() {
            self.focus = Focus::Row(Column::FIRST);
        }
    }

    fn navigate(&mut self, nav: Nav) {
        let len = self.visible.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = match nav {
            Nav::Up => self.cursor.saturating_sub(1),
            Nav::Down => (self.cursor + 1).min(len - 1),
            Nav::First => 0,
            Nav::Last => len - 1,
        };
    }

    fn refilter(&mut self) {
        self.visible = filter::visible_indices(
            self.rows.iter().map(|r| r.name.as_str()),
            self.search.value(),
        );
        self.cursor = filter::clamp_cursor(self.cursor, self.visible.len());
    }

    fn log(&mut self, index: usize, field: Column, old: String, new: String) {
        let record = ChangeRecord {
            name: self.rows[index].name.clone(),
            field,
            old,
            new,
        };
        self.changes.record(index, record);
    }

    fn cycle_modifier(&mut self, forward: bool) {
        let Some(i) = self.selected() else { return };
        let modifiers = self.modifiers;
        let row = &mut self.rows[i];
        let old = row.modifier_display(&modifiers);
        row.modifier = Some(if forward {
            modifiers.next(row.modifier)
        } else {
            modifiers.prev(row.modifier)
        });
        let new = row.modifier_display(&modifiers);
        self.log(i, Column::Modifier, old, new);
    }

    fn clear_modifier(&mut self) {
        let Some(i) = self.selected() else { return };
        let modifiers = self.modifiers;
        let row = &mut self.rows[i];
        if row.modifier.is_none() {
            return;
        }
        let old = row.modifier_display(&modifiers);
        row.modifier = None;
        self.log(i, Column::Modifier, old, UNSET.to_string());
    }

    fn cycle_mode(&mut self, forward: bool) {
        let Some(i) = self.selected() else { return };
        let row = &mut self.rows[i];
        let old = row.mode;
        row.mode = if forward { old.next() } else { old.prev() };
        let new = row.mode;
        self.log(i, Column::Mode, old.to_string(), new.to_string());
    }

    fn toggle_enabled(&mut self) {
        let Some(i) = self.selected() else { return };
        let row = &mut self.rows[i];
        let old = row.enabled;
        row.enabled = !old;
        self.log(i, Column::Enabled, old.to_string(), (!old).to_string());
    }

    fn clear_key(&mut self) {
        let Some(i) = self.selected() else { return };
        let row = &mut self.rows[i];
        if row.key.is_empty() {
            return;
        }
        let old = std::mem::take(&mut row.key);
        self.log(i, Column::Key, old, CLEARED.to_string());
    }

    fn set_key(&mut self, name: String) {
        let Some(i) = self.selected() else { return };
        let row = &mut self.rows[i];
        if row.key == name {
            return;
        }
        let old = row.key_display();
        row.key = name.clone();
        self.log(i, Column::Key, old, name);
    }
}

/// Row navigation shared by every focus. Letter bindings are skipped while the
/// search query is being typed.
fn nav_for(key: &KeyEvent, allow_letters: bool) -> Option<Nav> {
    match key.code {
        KeyCode::Up => Some(Nav::Up),
        KeyCode::Down => Some(Nav::Down),
        KeyCode::Home => Some(Nav::First),
        KeyCode::End => Some(Nav::Last),
        KeyCode::Char('k') if allow_letters => Some(Nav::Up),
        KeyCode::Char('j') if allow_letters => Some(Nav::Down),
        KeyCode::Char('g') if allow_letters => Some(Nav::First),
        KeyCode::Char('G') if allow_letters => Some(Nav::Last),
        _ => None,
    }
}
