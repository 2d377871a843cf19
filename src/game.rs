use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::apple::Apple;
use crate::config::Board;
use crate::input::GameInput;
use crate::snake::{MoveOutcome, Snake};

/// Observable state of the loop after a tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    /// The snake hit itself on the last tick and was reset; the board is
    /// cleared before the next draw.
    Collided,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub status: GameStatus,
    pub tick_count: u64,
    board: Board,
    rng: StdRng,
}

impl GameState {
    /// Creates a deterministic state; the same seed replays the same game
    /// for the same inputs.
    #[must_use]
    pub fn new_with_seed(board: Board, seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(board);
        let apple = Apple::new(board, snake.head());

        let mut state = Self {
            snake,
            apple,
            status: GameStatus::Running,
            tick_count: 0,
            board,
            rng,
        };
        state.place_apple();
        state
    }

    /// Advances simulation by one gameplay tick: move, then eat.
    pub fn tick(&mut self) -> GameStatus {
        self.tick_count += 1;

        self.status = match self.snake.advance(&mut self.rng) {
            MoveOutcome::Moved { .. } => GameStatus::Running,
            MoveOutcome::Collided => GameStatus::Collided,
        };

        // A freshly reset snake can still land on the apple.
        if self.snake.head() == self.apple.position {
            self.snake.grow();
            debug!(
                "apple eaten at ({}, {}), target length now {}",
                self.apple.position.x,
                self.apple.position.y,
                self.snake.target_length()
            );
            self.place_apple();
        }

        self.status
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.snake.set_next_direction(direction),
            GameInput::Quit => {}
        }
    }

    /// Returns the board geometry this game runs on.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Re-rolls the apple until it lands outside the snake body.
    fn place_apple(&mut self) {
        let mut position = self.apple.randomize_position(&mut self.rng);
        while self.snake.occupies(position) {
            position = self.apple.randomize_position(&mut self.rng);
        }
        debug!("apple placed at ({}, {})", position.x, position.y);
    }
}
