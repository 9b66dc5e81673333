pub mod header;
pub mod help_bar;
pub mod search_bar;
pub mod settings_table;
pub mod status_line;
