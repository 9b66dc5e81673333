use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::editor::{Column, Editor, Focus};
use crate::ui::theme::Theme;

pub fn status_text(editor: &Editor) -> String {
    let column = match editor.focus {
        Focus::Browse => return "BROWSE".to_string(),
        Focus::Search => return "SEARCH MODE".to_string(),
        Focus::Row(column) => match column {
            Column::Modifier => "modifier",
            Column::Key => "key",
            Column::Mode => "mode",
            Column::Enabled => "enabled",
        },
        Focus::Capture => "key (recording)",
    };
    format!("EDITING ROW  |  column: {column}")
}

pub struct StatusLine<'a> {
    pub editor: &'a Editor,
    /// Last storage error, shown after the mode indicator.
    pub error: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Widget for &StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut spans = vec![Span::styled(
            format!("  {}", status_text(self.editor)),
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        )];
        if self.editor.changes.is_dirty() {
            spans.push(Span::styled("  [unsaved]", Style::default().fg(colors.dim())));
        }
        if let Some(err) = self.error {
            spans.push(Span::styled(
                format!("  {err}"),
                Style::default().fg(colors.error()),
            ));
        }
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(colors.bg()))
            .render(area, buf);
    }
}
