use std::fmt;

/// Launch mode stored per application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Default,
    Fullscreen,
    Desktop,
}

impl Mode {
    /// Fixed cycling order used by the editor.
    pub const ALL: [Mode; 3] = [Mode::Default, Mode::Fullscreen, Mode::Desktop];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::Fullscreen => "fullscreen",
            Mode::Desktop => "desktop",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.position() + n - 1) % n]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the `settings` table. Keyed by `path`; `id` is assigned by the
/// database and never reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setting {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub icon_path: String,
    pub hotkey: String,
    pub mode: Mode,
    pub enabled: bool,
}

pub const CREATE_SETTINGS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    path TEXT NOT NULL,
    icon_path TEXT NOT NULL,
    hotkey TEXT,
    mode TEXT,
    enabled BOOLEAN
);
";
