use std::collections::VecDeque;

use crate::config::Board;
use crate::input::Direction;

/// World position in grid-aligned coordinates (y grows upward).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the position one `step` away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction, step: i32) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y + step,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y - step,
            },
            Direction::Left => Self {
                x: self.x - step,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + step,
                y: self.y,
            },
        }
    }
}

/// The snake's segment chain and facing direction.
///
/// Segments are ordered head first. Movement is follow-the-leader: every
/// segment takes the position its predecessor held on the previous tick,
/// which a deque expresses as push-front-the-new-head, pop-the-tail.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates the starting snake: three segments trailing left from the
    /// origin, facing right.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let step = board.step;
        let segments = (0..crate::config::INITIAL_SNAKE_SEGMENTS as i32)
            .map(|i| Position { x: -i * step, y: 0 })
            .collect();

        Self {
            segments,
            direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit segments (first element is the head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            segments: VecDeque::from(segments),
            direction,
        }
    }

    /// Changes the facing direction unless the request is a direct reversal,
    /// which is silently ignored (reversing in place would be an instant
    /// self-collision).
    pub fn turn(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Advances the whole snake one `step` in the facing direction.
    ///
    /// Off-board head positions are legal transient state here; wall
    /// detection is the collision detector's job.
    pub fn advance(&mut self, step: i32) {
        let next_head = self.head().stepped(self.direction, step);
        self.segments.push_front(next_head);
        let _ = self.segments.pop_back();
    }

    /// Appends a duplicate of the tail segment, growing the snake by one.
    ///
    /// The duplicate overlaps the old tail until the next [`advance`] pulls
    /// it onto its own cell.
    ///
    /// [`advance`]: Snake::advance
    pub fn grow(&mut self) {
        if let Some(tail) = self.segments.back().copied() {
            self.segments.push_back(tail);
        }
    }

    /// The current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .segments
            .front()
            .expect("snake always has at least one segment")
    }

    /// Euclidean distance from the head to `point`.
    #[must_use]
    pub fn head_distance_to(&self, point: Position) -> f64 {
        self.head().distance_to(point)
    }

    /// Current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the snake has no segments (never the case for a snake
    /// built through this module's constructors).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Current facing direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }
}
