use rand::Rng;

use crate::config::{APPLE_COLOR, BORDER_COLOR, Board};
use crate::renderer::{Canvas, Drawable};
use crate::snake::Position;

/// The single piece of food on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Position,
    board: Board,
}

impl Apple {
    /// Creates an apple at `position`.
    #[must_use]
    pub fn new(board: Board, position: Position) -> Self {
        Self { position, board }
    }

    /// Moves the apple to a uniformly random cell and returns it.
    ///
    /// Only visible cells are picked; the head can never stand on the column
    /// or row just past the board, since stepping there reflects to zero.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Position {
        self.position = Position {
            x: rng.gen_range(0..self.board.grid_width()) * self.board.cell,
            y: rng.gen_range(0..self.board.grid_height()) * self.board.cell,
        };
        self.position
    }
}

impl Drawable for Apple {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_cell(self.position, APPLE_COLOR, Some(BORDER_COLOR));
    }
}
