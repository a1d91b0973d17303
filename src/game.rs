use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::collision::{self, Verdict};
use crate::config::Board;
use crate::food::Food;
use crate::input::Direction;
use crate::score::{ScoreStore, Scoreboard};
use crate::snake::{Position, Snake};

/// Engine-level lifecycle state. `GameOver` is terminal until [`GameState::reset`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Caller contract violations surfaced by the engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// [`GameState::tick`] was invoked after game over without a reset.
    #[error("tick invoked after game over; call reset to start a new game")]
    NotRunning,
}

/// Immutable per-tick view handed to renderers.
///
/// Renderers get everything they draw from here and nothing else, so any
/// number of front-ends can sit on the same engine without duplicating
/// game rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub segments: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub total_games: u32,
    pub game_over: bool,
}

/// Complete game state for one session, advanced one tick at a time.
///
/// Timing lives with the caller: this type only exposes [`tick`] and is
/// agnostic to how often it is invoked. Direction input arrives at any time
/// via [`queue_direction`] and is applied, last writer wins, at the start
/// of the next tick.
///
/// [`tick`]: GameState::tick
/// [`queue_direction`]: GameState::queue_direction
#[derive(Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub scoreboard: Scoreboard,
    pub status: GameStatus,
    pub tick_count: u64,
    board: Board,
    pending_direction: Option<Direction>,
    rng: StdRng,
}

impl GameState {
    /// Creates a session with an entropy-seeded RNG and the given store.
    #[must_use]
    pub fn new(board: Board, store: ScoreStore) -> Self {
        Self::with_rng(board, store, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    /// The score store is disabled so runs leave no files behind.
    #[must_use]
    pub fn new_with_seed(board: Board, seed: u64) -> Self {
        Self::with_rng(board, ScoreStore::disabled(), StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, store: ScoreStore, mut rng: StdRng) -> Self {
        let snake = Snake::new(board);
        let food = Food::spawn(&mut rng, board);

        Self {
            snake,
            food,
            scoreboard: Scoreboard::new(store),
            status: GameStatus::Running,
            tick_count: 0,
            board,
            pending_direction: None,
            rng,
        }
    }

    /// Records a direction request for the next tick.
    ///
    /// Multiple requests between ticks overwrite each other; reversal
    /// filtering happens when the buffered value is applied, against the
    /// direction the snake actually has at that moment.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Advances the game by one tick and reports what happened.
    ///
    /// Errors when called after game over: advancing a finished game is a
    /// driver bug, not a state the engine will silently absorb.
    pub fn tick(&mut self) -> Result<Verdict, GameError> {
        if self.status != GameStatus::Running {
            return Err(GameError::NotRunning);
        }

        self.tick_count += 1;

        if let Some(direction) = self.pending_direction.take() {
            self.snake.turn(direction);
        }
        self.snake.advance(self.board.step);

        let verdict = collision::classify(&self.snake, &self.food, self.board);
        match verdict {
            Verdict::Food => {
                self.food.refresh(&mut self.rng, self.board);
                self.snake.grow();
                self.scoreboard.increase();
            }
            Verdict::Wall | Verdict::SelfHit => {
                self.scoreboard.game_over();
                self.status = GameStatus::GameOver;
            }
            Verdict::None => {}
        }

        Ok(verdict)
    }

    /// Starts a new game: fresh snake and food, score cleared, persisted
    /// high score and games tally carried over.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.board);
        self.food = Food::spawn(&mut self.rng, self.board);
        self.scoreboard.reset();
        self.pending_direction = None;
        self.tick_count = 0;
        self.status = GameStatus::Running;
    }

    /// Builds the immutable view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.segments().copied().collect(),
            food: self.food.position,
            direction: self.snake.direction(),
            score: self.scoreboard.score(),
            high_score: self.scoreboard.high_score(),
            total_games: self.scoreboard.total_games(),
            game_over: self.status == GameStatus::GameOver,
        }
    }

    /// The board this session plays on.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }
}
