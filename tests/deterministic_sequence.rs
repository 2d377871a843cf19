use grid_snake::config::BOARD;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::{Direction, GameInput};
use grid_snake::snake::{Position, Snake};

#[test]
fn stepwise_eating_turning_and_self_collision() {
    let mut state = GameState::new_with_seed(BOARD, 42);

    state.snake = Snake::from_segments(
        BOARD,
        vec![
            Position { x: 100, y: 100 },
            Position { x: 80, y: 100 },
            Position { x: 60, y: 100 },
        ],
        Direction::Right,
    );
    state.apple.position = Position { x: 120, y: 100 };

    assert_eq!(state.tick(), GameStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 120, y: 100 });
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.target_length(), 4);
    assert_eq!(state.snake.vacated(), Some(Position { x: 60, y: 100 }));
    assert!(!state.snake.occupies(state.apple.position));

    // Keep the apple out of the way for the rest of the script.
    state.apple.position = Position { x: 600, y: 400 };

    state.apply_input(GameInput::Direction(Direction::Down));
    assert_eq!(state.tick(), GameStatus::Running);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.vacated(), None);

    state.apply_input(GameInput::Direction(Direction::Left));
    assert_eq!(state.tick(), GameStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 100, y: 120 });

    // Up runs into the segment at (100, 100).
    state.apply_input(GameInput::Direction(Direction::Up));
    assert_eq!(state.tick(), GameStatus::Collided);
    assert_eq!(
        state.snake.segments().copied().collect::<Vec<_>>(),
        vec![Position { x: 320, y: 240 }]
    );
    assert_eq!(state.snake.target_length(), 1);

    assert_eq!(state.tick(), GameStatus::Running);
}

#[test]
fn edge_crossing_reflects_instead_of_wrapping() {
    let mut state = GameState::new_with_seed(BOARD, 7);
    state.snake = Snake::from_segments(
        BOARD,
        vec![Position { x: 600, y: 40 }],
        Direction::Right,
    );
    state.apple.position = Position { x: 0, y: 400 };

    state.tick();
    assert_eq!(state.snake.head(), Position { x: 620, y: 40 });

    state.tick();
    assert_eq!(state.snake.head(), Position { x: 0, y: 40 });
}

#[test]
fn same_seed_replays_the_same_game() {
    let script = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Down,
    ];
    let mut first = GameState::new_with_seed(BOARD, 1234);
    let mut second = GameState::new_with_seed(BOARD, 1234);

    for step in 0..400 {
        if step % 9 == 0 {
            let input = GameInput::Direction(script[(step / 9) % script.len()]);
            first.apply_input(input);
            second.apply_input(input);
        }

        assert_eq!(first.tick(), second.tick());
        assert_eq!(first.snake.head(), second.snake.head());
        assert_eq!(first.apple.position, second.apple.position);
    }
}
