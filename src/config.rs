use ratatui::style::Color;

/// Board geometry in board units, passed through the game as a named type.
///
/// Positions are cell-aligned multiples of `cell`; `width` and `height` are
/// the pixel-style extents of the board, not cell counts.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub cell: i32,
}

impl Board {
    /// Number of cell columns on the visible board.
    #[must_use]
    pub const fn grid_width(self) -> i32 {
        self.width / self.cell
    }

    /// Number of cell rows on the visible board.
    #[must_use]
    pub const fn grid_height(self) -> i32 {
        self.height / self.cell
    }

    /// The spawn cell used at start and after every reset.
    #[must_use]
    pub const fn center(self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

/// The reference 640x480 board split into 20-unit cells (32x24 grid).
pub const BOARD: Board = Board {
    width: 640,
    height: 480,
    cell: 20,
};

/// Simulation rate of the game loop.
pub const TICKS_PER_SECOND: u32 = 10;

pub const BOARD_BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
pub const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Terminal columns used per board cell; keeps cells roughly square.
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;

/// Glyph pair for a filled cell: the outline color is drawn as thin edges
/// over the fill color.
pub const GLYPH_CELL_OUTLINED: &str = "▕▏";

/// Glyph pair for a fill without outline.
pub const GLYPH_CELL_PLAIN: &str = "  ";
