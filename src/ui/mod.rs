pub mod components;
pub mod layout;
pub mod line_input;
pub mod theme;

use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::app::App;
use crate::editor::Focus;
use components::header::Header;
use components::help_bar::{HelpBar, help_lines};
use components::search_bar::SearchBar;
use components::settings_table::SettingsTable;
use components::status_line::StatusLine;
use layout::AppLayout;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.theme;
    let editor = &app.editor;

    let bg = Block::default().style(Style::default().bg(theme.colors.bg()));
    frame.render_widget(bg, area);

    let hints = help_lines(editor.focus, area.width);
    let layout = AppLayout::new(area, hints.len() as u16);

    if layout.header.height > 0 {
        frame.render_widget(
            &Header {
                version: app.version,
                theme,
            },
            layout.header,
        );
    }
    frame.render_widget(
        &SearchBar {
            input: &editor.search,
            active: editor.focus == Focus::Search,
            theme,
        },
        layout.search,
    );
    frame.render_widget(&SettingsTable { editor, theme }, layout.table);
    frame.render_widget(
        &StatusLine {
            editor,
            error: app.last_error.as_deref(),
            theme,
        },
        layout.status,
    );
    frame.render_widget(
        &HelpBar {
            lines: &hints,
            theme,
        },
        layout.help,
    );
}
