//! Bounded-board snake: game-state engine plus a terminal front-end.
//!
//! The engine ([`game::GameState`] and the modules it composes) owns all
//! gameplay rules and exposes one immutable [`game::Snapshot`] per tick.
//! Everything under [`renderer`], [`ui`], and [`input`] is a presentation
//! adapter over that snapshot and holds no game logic of its own.

pub mod collision;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
