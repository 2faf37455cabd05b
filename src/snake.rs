use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one step towards `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    Moved,
    AteFood,
    Collided(DeathReason),
}

/// Snake body plus its committed and pending headings.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    pending: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self::from_segments(vec![start], direction)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least a head");

        Self {
            body: VecDeque::from(segments),
            heading: direction,
            pending: direction,
        }
    }

    /// Requests a new heading for the next movement step.
    ///
    /// Reversals are judged against the direction of the last step, not the
    /// pending one, so two quick turns cannot fold the head back into the neck.
    pub fn change_direction(&mut self, requested: Direction) {
        if direction_change_is_valid(self.heading, requested) {
            self.pending = requested;
        }
    }

    /// Moves one cell along the pending heading.
    ///
    /// The body is left untouched when the move collides. The self check runs
    /// before the tail moves, so stepping into the current tail cell collides.
    pub fn advance(&mut self, bounds: GridSize, food: Position) -> MoveOutcome {
        let next_head = self.next_head_position();

        if !next_head.is_within_bounds(bounds) {
            return MoveOutcome::Collided(DeathReason::WallCollision);
        }

        if self.occupies(next_head) {
            return MoveOutcome::Collided(DeathReason::SelfCollision);
        }

        self.heading = self.pending;
        self.body.push_front(next_head);

        if next_head == food {
            return MoveOutcome::AteFood;
        }

        let _ = self.body.pop_back();
        MoveOutcome::Moved
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().stepped(self.pending)
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

    /// Direction of the last completed step.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.heading
    }

    /// Direction the next step will take.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
