use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random draws tried before falling back to enumerating free cells.
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Picks a uniformly random cell that the snake does not occupy.
///
/// Returns `None` only when the snake covers the whole board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    spawn_position_with_attempts(rng, bounds, snake, MAX_SAMPLE_ATTEMPTS)
}

fn spawn_position_with_attempts<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    attempts: usize,
) -> Option<Position> {
    if bounds.width == 0 || bounds.height == 0 || snake.len() >= bounds.total_cells() {
        return None;
    }

    for _ in 0..attempts {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    // Crowded board: sample among what is left instead.
    let candidates = free_cells(bounds, snake);
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    candidates
}
