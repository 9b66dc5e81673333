pub mod app;
pub mod config;
pub mod editor;
pub mod event;
pub mod hotkey;
pub mod logging;
pub mod reconcile;
pub mod scan;
pub mod store;
pub mod ui;
