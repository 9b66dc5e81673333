use crate::hotkey::{self, ModifierSet};
use crate::store::{Mode, Setting};

/// Shown for an unset modifier or key.
pub const UNSET: &str = "---";
/// Recorded as the new value when a key is cleared.
pub const CLEARED: &str = "(cleared)";
/// Shown in the key cell while a key press is being captured.
pub const RECORDING: &str = "recording...";

/// In-memory editable copy of a [`Setting`], with the hotkey split into its two halves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub id: i64,
    pub name: String,
    pub modifier: Option<usize>,
    pub key: String,
    pub mode: Mode,
    pub enabled: bool,
}

/// Display strings for one table row. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewRow {
    pub name: String,
    pub modifier: String,
    pub key: String,
    pub mode: String,
    pub enabled: String,
}

impl Row {
    pub fn from_setting(setting: &Setting, modifiers: &ModifierSet) -> Self {
        let (modifier, key) = hotkey::parse(&setting.hotkey, modifiers);
        Self {
            id: setting.id,
            name: setting.name.clone(),
            modifier,
            key,
            mode: setting.mode,
            enabled: setting.enabled,
        }
    }

    /// Persisted `modifier+key` form.
    pub fn hotkey(&self, modifiers: &ModifierSet) -> String {
        let canonical = self.modifier.and_then(|i| modifiers.canonical(i));
        hotkey::compose(canonical, &self.key)
    }

    pub fn modifier_display(&self, modifiers: &ModifierSet) -> String {
        self.modifier
            .and_then(|i| modifiers.label(i))
            .unwrap_or(UNSET)
            .to_string()
    }

    pub fn key_display(&self) -> String {
        if self.key.is_empty() {
            UNSET.to_string()
        } else {
            self.key.clone()
        }
    }

    pub fn view(&self, modifiers: &ModifierSet) -> ViewRow {
        ViewRow {
            name: self.name.clone(),
            modifier: self.modifier_display(modifiers),
            key: self.key_display(),
            mode: self.mode.to_string(),
            enabled: self.enabled.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotkey::Platform;

    fn setting(hotkey: &str) -> Setting {
        Setting {
            id: 7,
            name: "Firefox".to_string(),
            path: "/Applications/Firefox.app/Contents/MacOS".to_string(),
            icon_path: String::new(),
            hotkey: hotkey.to_string(),
            mode: Mode::Fullscreen,
            enabled: false,
        }
    }

    #[test]
    fn test_from_setting_splits_hotkey() {
        let mods = ModifierSet::for_platform(Platform::MacOs);
        let row = Row::from_setting(&setting("meta+f"), &mods);
        assert_eq!(row.modifier, Some(3));
        assert_eq!(row.key, "f");
        assert_eq!(row.hotkey(&mods), "meta+f");
    }

    #[test]
    fn test_view_of_unset_hotkey() {
        let mods = ModifierSet::for_platform(Platform::Linux);
        let view = Row::from_setting(&setting(""), &mods).view(&mods);
        assert_eq!(view.modifier, UNSET);
        assert_eq!(view.key, UNSET);
        assert_eq!(view.mode, "fullscreen");
        assert_eq!(view.enabled, "false");
    }

    #[test]
    fn test_view_uses_platform_labels() {
        let mods = ModifierSet::for_platform(Platform::MacOs);
        let view = Row::from_setting(&setting("alt+space"), &mods).view(&mods);
        assert_eq!(view.modifier, "⌥ Option");
        assert_eq!(view.key, "space");
    }

    #[test]
    fn test_unset_row_composes_joined_form() {
        let mods = ModifierSet::for_platform(Platform::Linux);
        let row = Row::from_setting(&setting(""), &mods);
        assert_eq!(row.hotkey(&mods), "+");
    }
}
