pub mod keys;
pub mod modifier;

pub use modifier::{ModifierSet, Platform};

/// Join a canonical modifier and a key into the persisted form `modifier+key`.
/// Both halves are always present in the joined string, even when empty.
pub fn compose(modifier: Option<&str>, key: &str) -> String {
    format!("{}+{}", modifier.unwrap_or(""), key)
}

/// Split a persisted hotkey into (modifier index, key).
///
/// Splits on the first `+`, so `ctrl++` keeps `+` as the key. A string without
/// `+` is a bare key. Unknown modifier names are dropped.
pub fn parse(hotkey: &str, modifiers: &ModifierSet) -> (Option<usize>, String) {
    match hotkey.split_once('+') {
        Some((modifier, key)) => (modifiers.index_of_canonical(modifier), key.to_string()),
        None => (None, hotkey.to_string()),
    }
}
