/// Canonical modifier names, in display order. These are what gets persisted.
pub const CANONICAL_MODIFIERS: [&str; 4] = ["shift", "alt", "ctrl", "meta"];

const MACOS_LABELS: [&str; 4] = ["⇧ Shift", "⌥ Option", "⌃ Control", "⌘ Command"];
const LINUX_LABELS: [&str; 4] = ["Shift", "Alt", "Ctrl", "Super"];
const WINDOWS_LABELS: [&str; 4] = ["⭡ Shift", "⎇ Alt", "⌃ Ctrl", "⊞ Win"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Ordered modifier labels for one platform. Index `i` of the labels corresponds
/// to index `i` of [`CANONICAL_MODIFIERS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModifierSet {
    labels: &'static [&'static str; 4],
}

impl ModifierSet {
    pub fn for_platform(platform: Platform) -> Self {
        let labels = match platform {
            Platform::MacOs => &MACOS_LABELS,
            Platform::Linux => &LINUX_LABELS,
            Platform::Windows => &WINDOWS_LABELS,
        };
        Self { labels }
    }

    pub fn current() -> Self {
        Self::for_platform(Platform::current())
    }

    fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, index: usize) -> Option<&'static str> {
        self.labels.get(index).copied()
    }

    pub fn canonical(&self, index: usize) -> Option<&'static str> {
        CANONICAL_MODIFIERS.get(index).copied()
    }

    pub fn index_of_canonical(&self, name: &str) -> Option<usize> {
        CANONICAL_MODIFIERS.iter().position(|m| *m == name)
    }

    /// Step forward through the labels, wrapping. An unset modifier starts at the first label.
    pub fn next(&self, current: Option<usize>) -> usize {
        match current {
            Some(i) => (i + 1) % self.len(),
            None => 0,
        }
    }

    /// Step backward through the labels, wrapping. An unset modifier starts at the last label.
    pub fn prev(&self, current: Option<usize>) -> usize {
        let n = self.len();
        match current {
            Some(i) => (i + n - 1) % n,
            None => n - 1,
        }
    }
}
