use std::collections::VecDeque;

use log::info;
use rand::Rng;

use crate::config::{BOARD_BACKGROUND_COLOR, BORDER_COLOR, Board, SNAKE_COLOR};
use crate::input::{Direction, direction_change_is_valid};
use crate::renderer::{Canvas, Drawable};

/// Board position in board units (cell-aligned).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies on the visible board.
    #[must_use]
    pub fn is_within_bounds(self, board: Board) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < board.width && self.y < board.height
    }

    /// Returns the position one cell away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction, board: Board) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * board.cell,
            y: self.y + dy * board.cell,
        }
    }

    /// Folds an out-of-range coordinate back onto the board on each axis.
    ///
    /// This is a reflection, not a modulo wrap: an axis value at or past its
    /// bound, or below zero, becomes `|value - bound|`. Leaving through the
    /// right edge lands on column zero, while leaving through the left edge
    /// lands one cell past the right edge.
    #[must_use]
    pub fn reflected(self, board: Board) -> Self {
        Self {
            x: reflect_axis(self.x, board.width),
            y: reflect_axis(self.y, board.height),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

fn reflect_axis(value: i32, bound: i32) -> i32 {
    if value >= bound || value < 0 {
        (value - bound).abs()
    } else {
        value
    }
}

/// Result of a single [`Snake::advance`] step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    /// The head moved; `vacated` is the tail cell dropped this step, if any.
    Moved { vacated: Option<Position> },
    /// The head ran into the body and the snake was reset.
    Collided,
}

/// Mutable snake state: body, committed and pending direction, target length.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    next_direction: Option<Direction>,
    length: usize,
    vacated: Option<Position>,
    board: Board,
}

impl Snake {
    /// Creates a one-cell snake at the board center heading right.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::from_segments(board, vec![board.center().into()], Direction::Right)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The target length equals the number of segments. Meant for scenarios
    /// and tests; `segments` must not be empty.
    #[must_use]
    pub fn from_segments(board: Board, segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            length: segments.len(),
            body: VecDeque::from(segments),
            direction,
            next_direction: None,
            vacated: None,
            board,
        }
    }

    /// Records a pending direction; a reversal of the committed direction is
    /// ignored. Later calls before the next advance overwrite earlier ones.
    pub fn set_next_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.next_direction = Some(direction);
        }
    }

    /// Queues one extra segment; takes effect on the next advance.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Applies one movement step.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MoveOutcome {
        if let Some(next) = self.next_direction.take() {
            self.direction = next;
        }

        let next_head = self.head().stepped(self.direction, self.board).reflected(self.board);

        // Checked against the untrimmed body: the tail cell still counts.
        if self.occupies(next_head) {
            info!(
                "snake hit itself at ({}, {}) with length {}",
                next_head.x, next_head.y, self.length
            );
            self.reset(rng);
            return MoveOutcome::Collided;
        }

        self.body.push_front(next_head);
        self.vacated = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };

        MoveOutcome::Moved {
            vacated: self.vacated,
        }
    }

    /// Collapses to a single centered cell with a random heading.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.body.clear();
        self.body.push_front(self.board.center().into());
        self.length = 1;
        self.direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        self.next_direction = None;
        self.vacated = None;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the length the body grows towards.
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.length
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the pending direction, if one was requested since the last advance.
    #[must_use]
    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    /// Tail cell dropped by the most recent advance.
    #[must_use]
    pub fn vacated(&self) -> Option<Position> {
        self.vacated
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

impl Drawable for Snake {
    fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(vacated) = self.vacated {
            canvas.fill_cell(vacated, BOARD_BACKGROUND_COLOR, None);
        }

        for segment in self.body.iter().skip(1) {
            canvas.fill_cell(*segment, SNAKE_COLOR, Some(BORDER_COLOR));
        }

        canvas.fill_cell(self.head(), SNAKE_COLOR, Some(BORDER_COLOR));
    }
}
