use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use serpent::config::{
    Board, Theme, DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, THEME_CLASSIC, THEME_NEON,
    THEME_OCEAN,
};
use serpent::game::{GameState, GameStatus};
use serpent::input::{self, GameInput};
use serpent::renderer::Overlay;
use serpent::score::ScoreStore;
use serpent::terminal_runtime::TerminalSession;

/// How long input polling may block per frame.
const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum ThemeChoice {
    Classic,
    Ocean,
    Neon,
}

impl ThemeChoice {
    fn theme(self) -> Theme {
        match self {
            Self::Classic => THEME_CLASSIC,
            Self::Ocean => THEME_OCEAN,
            Self::Neon => THEME_NEON,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Classic bounded-board snake in the terminal")]
struct Cli {
    /// Tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Color theme.
    #[arg(long, value_enum, default_value_t = ThemeChoice::Classic)]
    theme: ThemeChoice,

    /// Override the high-score file location.
    #[arg(long = "scores-path")]
    scores_path: Option<PathBuf>,
}

/// What the front-end is showing; the engine only knows Running/GameOver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Screen {
    Start,
    Playing,
    Paused,
    GameOver,
}

impl Screen {
    fn overlay(self) -> Overlay {
        match self {
            Self::Start => Overlay::Start,
            Self::Playing => Overlay::None,
            Self::Paused => Overlay::Paused,
            Self::GameOver => Overlay::GameOver,
        }
    }
}

fn main() -> io::Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> io::Result<()> {
    let tick_interval = Duration::from_millis(cli.tick_ms.max(MIN_TICK_INTERVAL_MS));
    let theme = cli.theme.theme();
    let store = match cli.scores_path {
        Some(path) => ScoreStore::at(path),
        None => ScoreStore::default_path(),
    };

    let mut session = TerminalSession::enter()?;
    let mut state = GameState::new(Board::standard(), store);
    let mut screen = Screen::Start;
    let mut last_tick = Instant::now();

    loop {
        let snapshot = state.snapshot();
        session.draw(&snapshot, state.board(), &theme, screen.overlay())?;

        if let Some(event) = input::poll(FRAME_POLL_INTERVAL)? {
            let before = screen;
            match apply_input(&mut state, &mut screen, event) {
                LoopControl::Quit => break,
                LoopControl::Continue => {}
            }
            // Time spent on a menu must not count against the next tick,
            // or resuming would advance the snake instantly.
            if should_restart_tick_timer(before, screen) {
                last_tick = Instant::now();
            }
        }

        if screen == Screen::Playing && last_tick.elapsed() >= tick_interval {
            if state.tick().is_ok() && state.status == GameStatus::GameOver {
                screen = Screen::GameOver;
            }
            last_tick = Instant::now();
        }
    }

    Ok(())
}

enum LoopControl {
    Continue,
    Quit,
}

fn apply_input(state: &mut GameState, screen: &mut Screen, event: GameInput) -> LoopControl {
    match (event, *screen) {
        (GameInput::Quit, _) => return LoopControl::Quit,
        (GameInput::Confirm, Screen::Start) => *screen = Screen::Playing,
        (GameInput::Confirm, Screen::GameOver) => {
            state.reset();
            *screen = Screen::Playing;
        }
        (GameInput::Pause, Screen::Playing) => *screen = Screen::Paused,
        (GameInput::Pause, Screen::Paused) => *screen = Screen::Playing,
        (GameInput::Direction(direction), Screen::Playing) => {
            state.queue_direction(direction);
        }
        _ => {}
    }

    LoopControl::Continue
}

fn should_restart_tick_timer(before: Screen, after: Screen) -> bool {
    after == Screen::Playing && before != Screen::Playing
}
