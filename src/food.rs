use rand::Rng;

use crate::config::Board;
use crate::snake::Position;

/// The single piece of food on the board.
///
/// Placement draws a uniform random cell inside the board shrunk by its food
/// margin, so food never sits flush against a wall. The snake's body is
/// deliberately not consulted: food may land on an occupied cell, matching
/// the classic behavior where the next bite simply arrives early.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at an explicit position (used by tests and resets).
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Creates food at a random cell within `board`.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Self {
        Self {
            position: random_cell(rng, board),
        }
    }

    /// Moves the food to a fresh random cell after it has been eaten.
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R, board: Board) {
        self.position = random_cell(rng, board);
    }
}

/// Picks a grid-aligned position uniformly from the food-spawnable region.
///
/// Sampling in cell units and scaling by the step afterwards keeps every
/// candidate exactly on the grid, so the food is always reachable by the
/// snake's head.
fn random_cell<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Position {
    let reach = (board.half_extent - board.food_margin) / board.step;

    Position {
        x: rng.gen_range(-reach..=reach) * board.step,
        y: rng.gen_range(-reach..=reach) * board.step,
    }
}
