use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serpent::collision::Verdict;
use serpent::config::Board;
use serpent::food::Food;
use serpent::game::{GameError, GameState, GameStatus};
use serpent::input::Direction;
use serpent::score::ScoreStore;
use serpent::snake::Position;

#[test]
fn stepwise_food_collection_turn_and_wall_collision() {
    let mut game = GameState::new_with_seed(Board::standard(), 42);
    game.food = Food::at(Position { x: 20, y: 0 });

    // Tick 1: head lands on the food cell.
    assert_eq!(game.tick(), Ok(Verdict::Food));
    assert_eq!(game.snake.head(), Position { x: 20, y: 0 });
    assert_eq!(game.snake.len(), 4);
    assert_eq!(game.scoreboard.score(), 1);
    assert_eq!(game.status, GameStatus::Running);

    // Park the food out of the way and turn upward.
    game.food = Food::at(Position { x: -280, y: -280 });
    game.queue_direction(Direction::Up);
    assert_eq!(game.tick(), Ok(Verdict::None));
    assert_eq!(game.snake.head(), Position { x: 20, y: 20 });

    // Head climbs from y=20; y=380 is the last cell in play and the step
    // after that leaves the board.
    for expected_y in (40..=380).step_by(20) {
        assert_eq!(game.tick(), Ok(Verdict::None));
        assert_eq!(game.snake.head(), Position { x: 20, y: expected_y });
    }

    assert_eq!(game.tick(), Ok(Verdict::Wall));
    assert_eq!(game.snake.head(), Position { x: 20, y: 400 });
    assert_eq!(game.status, GameStatus::GameOver);
    assert!(game.scoreboard.is_game_over());

    // The finished game refuses further ticks until reset.
    assert_eq!(game.tick(), Err(GameError::NotRunning));

    game.reset();
    assert_eq!(game.status, GameStatus::Running);
    assert_eq!(game.snake.len(), 3);
    assert_eq!(game.scoreboard.score(), 0);
    assert_eq!(game.scoreboard.high_score(), 1);
    assert_eq!(game.scoreboard.total_games(), 1);
}

#[test]
fn high_score_survives_process_style_restart() {
    let path = unique_test_path("restart");

    {
        let mut game = GameState::new(Board::standard(), ScoreStore::at(&path));
        game.food = Food::at(Position { x: 20, y: 0 });
        assert_eq!(game.tick(), Ok(Verdict::Food));

        game.food = Food::at(Position { x: 40, y: 0 });
        assert_eq!(game.tick(), Ok(Verdict::Food));
        assert_eq!(game.scoreboard.score(), 2);

        // Steer into the nearest wall.
        game.food = Food::at(Position { x: -280, y: -280 });
        loop {
            match game.tick() {
                Ok(Verdict::Wall) => break,
                Ok(_) => continue,
                Err(error) => panic!("game ended unexpectedly: {error}"),
            }
        }
    }

    // A fresh session against the same store sees the previous lifetime.
    let revived = GameState::new(Board::standard(), ScoreStore::at(&path));
    assert_eq!(revived.scoreboard.score(), 0);
    assert_eq!(revived.scoreboard.high_score(), 2);
    assert_eq!(revived.scoreboard.total_games(), 1);

    cleanup_test_path(&path);
}

fn unique_test_path(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after epoch")
        .as_nanos();

    std::env::temp_dir()
        .join("serpent-sequence-tests")
        .join(format!("{label}-{nanos}.json"))
}

fn cleanup_test_path(path: &PathBuf) {
    let _ = fs::remove_file(path);
    if let Some(parent) = path.parent() {
        let _ = fs::remove_dir(parent);
    }
}
