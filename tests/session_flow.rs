use std::fs;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use yay::app::App;
use yay::config::Config;
use yay::editor::Focus;
use yay::hotkey::ModifierSet;
use yay::reconcile::fetch_settings;
use yay::store::Mode;
use yay::ui::theme::Theme;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn make_bundle(dir: &Path, name: &str) {
    fs::create_dir_all(dir.join(format!("{name}.app")).join("Contents").join("MacOS")).unwrap();
}

fn make_config(root: &TempDir, dirs: &[&Path]) -> Config {
    let mut config = Config::default();
    config.app_dirs = dirs
        .iter()
        .map(|d| d.to_string_lossy().to_string())
        .collect();
    config.database_path = root
        .path()
        .join("data")
        .join("db.sqlite3")
        .to_string_lossy()
        .to_string();
    config
}

fn press_all(app: &mut App, keys: &[KeyEvent]) {
    for k in keys {
        app.handle_key(*k).unwrap();
    }
}

#[test]
fn test_edits_survive_rescan() {
    let root = TempDir::new().unwrap();
    let apps_dir = root.path().join("Applications");
    for name in ["Firefox", "Terminal", "Finder"] {
        make_bundle(&apps_dir, name);
    }
    let config = make_config(&root, &[&apps_dir, &root.path().join("missing")]);

    let (store, settings) = fetch_settings(&config).unwrap();
    let names: Vec<&str> = settings.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Finder", "Firefox", "Terminal"]);

    let mut app = App::new(&settings, store, Theme::default());

    // Search "term", edit the match: modifier, key, mode, enabled
    press_all(&mut app, &[ch('/'), ch('t'), ch('e'), ch('r'), ch('m')]);
    assert_eq!(app.editor.visible.len(), 1);
    press_all(&mut app, &[key(KeyCode::Enter)]);
    assert_eq!(app.editor.focus, Focus::Row(yay::editor::Column::Modifier));
    press_all(
        &mut app,
        &[
            key(KeyCode::Left),
            key(KeyCode::Tab),
            key(KeyCode::Enter),
            ch('t'),
            key(KeyCode::Tab),
            key(KeyCode::Right),
            key(KeyCode::Tab),
            ch(' '),
            key(KeyCode::Esc),
        ],
    );
    assert_eq!(app.editor.focus, Focus::Browse);
    assert!(!app.editor.changes.is_dirty());
    assert_eq!(app.editor.changes.history().len(), 4);
    press_all(&mut app, &[ch('q')]);
    assert!(app.should_quit);

    let report = app.report();
    assert!(report.contains("[Terminal] key: \"---\" -> \"t\""));
    assert!(report.contains("Total changes: 4"));
    drop(app);

    // Finder disappears, Notes appears
    fs::remove_dir_all(apps_dir.join("Finder.app")).unwrap();
    make_bundle(&apps_dir, "Notes");

    let (_, settings) = fetch_settings(&config).unwrap();
    let names: Vec<&str> = settings.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Firefox", "Terminal", "Notes"]);

    let terminal = &settings[1];
    assert_eq!(terminal.hotkey, "meta+t");
    assert_eq!(terminal.mode, Mode::Fullscreen);
    assert!(!terminal.enabled);

    let notes = &settings[2];
    assert_eq!(notes.hotkey, "");
    assert_eq!(notes.mode, Mode::Default);
    assert!(notes.enabled);
}

#[test]
fn test_loaded_hotkey_is_editable() {
    let root = TempDir::new().unwrap();
    let apps_dir = root.path().join("Applications");
    make_bundle(&apps_dir, "Finder");
    let config = make_config(&root, &[&apps_dir]);

    let (store, settings) = fetch_settings(&config).unwrap();
    store.update_hotkey(settings[0].id, "ctrl+f").unwrap();
    let settings = store.all().unwrap();

    let mut app = App::new(&settings, store, Theme::default());
    let modifiers = ModifierSet::current();
    assert_eq!(app.editor.rows[0].modifier, modifiers.index_of_canonical("ctrl"));
    assert_eq!(app.editor.rows[0].key, "f");

    // Clear the key, keep the modifier
    press_all(
        &mut app,
        &[
            key(KeyCode::Enter),
            key(KeyCode::Tab),
            key(KeyCode::Enter),
            key(KeyCode::Backspace),
        ],
    );
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    app.handle_key(ctrl_c).unwrap();
    assert!(app.should_quit);
    assert_eq!(app.store.all().unwrap()[0].hotkey, "ctrl+");
}

#[test]
fn test_no_apps_found() {
    let root = TempDir::new().unwrap();
    let empty = root.path().join("Applications");
    fs::create_dir_all(&empty).unwrap();
    let config = make_config(&root, &[&empty]);

    let (_, settings) = fetch_settings(&config).unwrap();
    assert!(settings.is_empty());
}
