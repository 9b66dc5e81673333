use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

const LOGO: [&str; 5] = [
    "██    ██  █████  ██    ██",
    " ██  ██  ██   ██  ██  ██ ",
    "  ████   ███████   ████  ",
    "   ██    ██   ██    ██   ",
    "   ██    ██   ██    ██   ",
];

pub struct Header<'a> {
    pub version: &'a str,
    pub theme: &'a Theme,
}

impl Widget for &Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let logo_style = Style::default().fg(colors.header_fg());

        let mut lines = vec![Line::from("")];
        let last = LOGO.len() - 1;
        for (i, row) in LOGO.iter().enumerate() {
            let mut spans = vec![Span::styled(format!("  {row}"), logo_style)];
            if i == last {
                spans.push(Span::styled(
                    format!("  v{}", self.version),
                    logo_style.add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .style(Style::default().bg(colors.bg()))
            .render(area, buf);
    }
}
