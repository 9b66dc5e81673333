use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row as TableRow, Table, Widget};

use crate::editor::{Editor, Focus, ViewRow};
use crate::ui::layout::scroll_offset;
use crate::ui::theme::Theme;

const HEADERS: [&str; 5] = ["Application", "Modifier", "Key", "Mode", "Enabled"];

pub struct SettingsTable<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

/// `showing a-b of n` for a window starting at `start` with `shown` rows.
pub fn range_label(start: usize, shown: usize, total: usize) -> String {
    format!("showing {}-{} of {}", start + 1, start + shown, total)
}

impl Widget for &SettingsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let editor = self.editor;
        let total = editor.visible.len();

        // Borders, header row and header separator
        let max_rows = area.height.saturating_sub(4) as usize;
        let start = scroll_offset(editor.cursor, total, max_rows);
        let shown = max_rows.min(total - start.min(total));

        let mut block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()).fg(colors.fg()));
        if total > 0 {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", range_label(start, shown, total)),
                Style::default().fg(colors.dim()),
            )));
        }

        if total == 0 {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Span::styled(
                " No matching applications.",
                Style::default().fg(colors.dim()),
            ))
            .render(inner, buf);
            return;
        }

        let row_focused = matches!(editor.focus, Focus::Row(_) | Focus::Capture);
        let active_col = editor.focused_column().map(|c| c.table_index());

        let normal = Style::default().fg(colors.fg());
        let cursor_row = normal.bg(colors.cursor_row_bg());
        let focused_row = normal.bg(colors.focused_row_bg());
        let active_cell = Style::default()
            .fg(colors.active_cell_fg())
            .bg(colors.active_cell_bg())
            .add_modifier(Modifier::BOLD);

        let view = editor.view_rows();
        let rows: Vec<TableRow> = view
            .into_iter()
            .enumerate()
            .skip(start)
            .take(shown)
            .map(|(pos, row)| {
                let is_cursor = pos == editor.cursor;
                let row_style = match (is_cursor, row_focused) {
                    (true, true) => focused_row,
                    (true, false) => cursor_row,
                    (false, _) => normal,
                };
                let cells = cells_for(row, is_cursor)
                    .into_iter()
                    .enumerate()
                    .map(|(col, text)| {
                        let cell = Cell::from(text);
                        if is_cursor && row_focused && active_col == Some(col) {
                            cell.style(active_cell)
                        } else {
                            cell
                        }
                    });
                TableRow::new(cells).style(row_style)
            })
            .collect();

        let header = TableRow::new(HEADERS.iter().map(|h| Cell::from(*h)))
            .style(normal.add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let widths = [
            Constraint::Percentage(36),
            Constraint::Percentage(18),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
            Constraint::Percentage(14),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

fn cells_for(row: ViewRow, is_cursor: bool) -> [String; 5] {
    let prefix = if is_cursor { "> " } else { "  " };
    [
        format!("{prefix}{}", row.name),
        row.modifier,
        row.key,
        row.mode,
        row.enabled,
    ]
}
