use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One of the nine cells of the grid, indexed 0 to 8 in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
pub struct Square(pub u8);

impl Square {
    #[must_use]
    #[inline(always)]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    #[must_use]
    #[inline(always)]
    pub const fn column(self) -> u8 {
        self.0 % 3
    }

    #[must_use]
    #[inline(always)]
    pub const fn from_row_column(row: u8, column: u8) -> Self {
        Self(row * 3 + column)
    }

    // Squares outside the grid can be constructed (e.g. from a hand-edited
    // history file). Board reads treat them as permanently occupied.
    #[must_use]
    #[inline(always)]
    pub const fn on_board(self) -> bool {
        self.0 < 9
    }
}

impl From<u8> for Square {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
