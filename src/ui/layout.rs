use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the logo and its trailing blank line.
pub const HEADER_HEIGHT: u16 = 7;

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub table: Rect,
    pub status: Rect,
    pub help: Rect,
}

impl AppLayout {
    /// The header is dropped on short terminals so the table keeps its space.
    pub fn new(area: Rect, help_lines: u16) -> Self {
        let header_height = if area.height >= HEADER_HEIGHT + 12 {
            HEADER_HEIGHT
        } else {
            0
        };

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(help_lines.max(1)),
            ])
            .split(area);

        Self {
            header: vertical[0],
            search: vertical[1],
            table: vertical[2],
            status: vertical[3],
            help: vertical[4],
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = " | ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

/// First row index to draw so that `cursor` stays inside a window of `max_rows`.
pub fn scroll_offset(cursor: usize, len: usize, max_rows: usize) -> usize {
    if max_rows == 0 || len <= max_rows {
        return 0;
    }
    let last_start = len - max_rows;
    cursor.saturating_sub(max_rows - 1).min(last_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_hint_lines_wraps() {
        let hints = ["enter: Edit Row", "/: Search", "ctrl+c: Quit"];
        let wide = pack_hint_lines(&hints, 80);
        assert_eq!(wide, vec!["  enter: Edit Row | /: Search | ctrl+c: Quit"]);

        let narrow = pack_hint_lines(&hints, 20);
        assert_eq!(
            narrow,
            vec!["  enter: Edit Row", "  /: Search", "  ctrl+c: Quit"]
        );
        assert!(pack_hint_lines(&hints, 0).is_empty());
    }

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 5, 10), 0);
        assert_eq!(scroll_offset(3, 20, 5), 0);
        assert_eq!(scroll_offset(4, 20, 5), 0);
        assert_eq!(scroll_offset(5, 20, 5), 1);
        assert_eq!(scroll_offset(19, 20, 5), 15);
        assert_eq!(scroll_offset(7, 20, 0), 0);
    }

    #[test]
    fn test_layout_drops_header_when_short() {
        let tall = AppLayout::new(Rect::new(0, 0, 80, 40), 1);
        assert_eq!(tall.header.height, HEADER_HEIGHT);
        assert_eq!(tall.search.height, 3);
        assert_eq!(tall.status.height, 1);

        let short = AppLayout::new(Rect::new(0, 0, 80, 12), 2);
        assert_eq!(short.header.height, 0);
        assert_eq!(short.help.height, 2);
    }
}
