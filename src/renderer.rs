use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BOARD_BACKGROUND_COLOR, BORDER_COLOR, Board, GLYPH_CELL_OUTLINED, GLYPH_CELL_PLAIN,
    TERMINAL_COLUMNS_PER_CELL,
};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;

/// Drawing surface addressed in board positions.
pub trait Canvas {
    /// Fills the cell at `position`, optionally with an outline color.
    fn fill_cell(&mut self, position: Position, fill: Color, outline: Option<Color>);
}

/// Something that can paint itself onto a [`Canvas`].
pub trait Drawable {
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// [`Canvas`] over a ratatui buffer region holding the visible board.
pub struct BoardCanvas<'a> {
    buffer: &'a mut Buffer,
    inner: Rect,
    board: Board,
}

impl<'a> BoardCanvas<'a> {
    #[must_use]
    pub fn new(buffer: &'a mut Buffer, inner: Rect, board: Board) -> Self {
        Self {
            buffer,
            inner,
            board,
        }
    }
}

impl Canvas for BoardCanvas<'_> {
    fn fill_cell(&mut self, position: Position, fill: Color, outline: Option<Color>) {
        let Some((x, y)) = board_to_terminal(self.inner, self.board, position) else {
            return;
        };

        let (glyph, style) = match outline {
            Some(outline) => (GLYPH_CELL_OUTLINED, Style::new().fg(outline).bg(fill)),
            None => (GLYPH_CELL_PLAIN, Style::new().bg(fill)),
        };
        self.buffer.set_string(x, y, glyph, style);
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let board = state.board();
    let area = board_area(frame.area(), board);

    // The block repaints every inner cell with the background, which is
    // what clears the board after a collision.
    let title = match state.status {
        GameStatus::Running => format!(" snake · length {} ", state.snake.len()),
        GameStatus::Collided => " snake · reset ".to_owned(),
    };
    let block = Block::bordered()
        .title(title)
        .title_style(Style::new().add_modifier(Modifier::BOLD))
        .border_style(Style::new().fg(BORDER_COLOR))
        .style(Style::new().bg(BOARD_BACKGROUND_COLOR));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut canvas = BoardCanvas::new(frame.buffer_mut(), inner, board);
    state.snake.draw(&mut canvas);
    state.apple.draw(&mut canvas);
}

/// Centers the bordered board inside `area`, shrinking it when the terminal
/// is too small.
#[must_use]
pub fn board_area(area: Rect, board: Board) -> Rect {
    let wanted_width = u16::try_from(board.grid_width())
        .unwrap_or(u16::MAX)
        .saturating_mul(TERMINAL_COLUMNS_PER_CELL)
        .saturating_add(2);
    let wanted_height = u16::try_from(board.grid_height())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let width = wanted_width.min(area.width);
    let height = wanted_height.min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Maps a board position to the top-left terminal cell of its glyph pair.
///
/// Returns `None` for positions off the visible board or outside `inner`.
fn board_to_terminal(inner: Rect, board: Board, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(board) {
        return None;
    }

    let column = u16::try_from(position.x / board.cell).ok()?;
    let row = u16::try_from(position.y / board.cell).ok()?;

    let x = inner
        .x
        .saturating_add(column.saturating_mul(TERMINAL_COLUMNS_PER_CELL));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(TERMINAL_COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
