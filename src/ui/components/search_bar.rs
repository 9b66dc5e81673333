use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

pub struct SearchBar<'a> {
    pub input: &'a LineInput,
    /// Draw the text cursor and focused border.
    pub active: bool,
    pub theme: &'a Theme,
}

impl Widget for &SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let border = if self.active {
            colors.accent()
        } else {
            colors.border()
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let label = Span::styled(
            " Search: ",
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        );
        let text_style = Style::default().fg(colors.fg());
        let cursor_style = Style::default().fg(colors.bg()).bg(colors.fg());

        let mut spans = vec![label];
        if self.active {
            let (before, cursor, after) = self.input.render_parts();
            spans.push(Span::styled(before.to_string(), text_style));
            match cursor {
                Some(ch) => spans.push(Span::styled(ch.to_string(), cursor_style)),
                None => spans.push(Span::styled(" ", cursor_style)),
            }
            spans.push(Span::styled(after.to_string(), text_style));
        } else if self.input.is_empty() {
            spans.push(Span::styled(
                "press / to filter",
                Style::default().fg(colors.dim()),
            ));
        } else {
            spans.push(Span::styled(self.input.value().to_string(), text_style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
