/// Editable columns of a focused row, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Modifier,
    Key,
    Mode,
    Enabled,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Modifier, Column::Key, Column::Mode, Column::Enabled];
    pub const FIRST: Column = Column::Modifier;

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.position() + n - 1) % n]
    }

    /// Field name used in change records.
    pub fn field_name(self) -> &'static str {
        match self {
            Column::Modifier => "modifier",
            Column::Key => "key",
            Column::Mode => "mode",
            Column::Enabled => "enabled",
        }
    }

    /// Position in the rendered table, after the application name.
    pub fn table_index(self) -> usize {
        self.position() + 1
    }
}
