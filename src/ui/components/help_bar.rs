use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::editor::{Column, Focus};
use crate::ui::layout::pack_hint_lines;
use crate::ui::theme::Theme;

pub fn hints_for(focus: Focus) -> &'static [&'static str] {
    match focus {
        Focus::Browse => &[
            "↑/↓/j/k: Navigate",
            "enter: Edit Row",
            "/: Search",
            "q/esc: Quit",
        ],
        Focus::Search => &[
            "↑/↓: Navigate",
            "enter: Edit Row",
            "esc: Stop Searching",
            "ctrl+c: Quit",
        ],
        Focus::Row(Column::Modifier) => &[
            "space/enter/←/→: Cycle Modifier",
            "backspace: Clear",
            "tab: Next Column",
            "esc: Un-focus",
        ],
        Focus::Row(Column::Key) => &[
            "enter: Record Key",
            "tab: Next Column",
            "esc: Un-focus",
        ],
        Focus::Row(Column::Mode) => &[
            "space/enter/←/→: Cycle Mode",
            "tab: Next Column",
            "esc: Un-focus",
        ],
        Focus::Row(Column::Enabled) => &[
            "space/enter: Toggle",
            "tab: Next Column",
            "esc: Un-focus",
        ],
        Focus::Capture => &[
            "Press any key to set key",
            "backspace: Clear",
            "esc: Cancel",
        ],
    }
}

/// Hint lines for `focus` packed to `width`.
pub fn help_lines(focus: Focus, width: u16) -> Vec<String> {
    pack_hint_lines(hints_for(focus), width as usize)
}

pub struct HelpBar<'a> {
    pub lines: &'a [String],
    pub theme: &'a Theme,
}

impl Widget for &HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        Paragraph::new(lines)
            .style(Style::default().fg(colors.dim()).bg(colors.bg()))
            .render(area, buf);
    }
}
