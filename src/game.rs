use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{DEFAULT_FOOD_REWARD, GridSize};
use crate::food::spawn_position;
use crate::input::{Direction, GameInput};
use crate::snake::{DeathReason, MoveOutcome, Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Fresh round shown behind the start popup; the snake holds still.
    Ready,
    Playing,
    GameOver,
    /// The snake covers every cell; no food can be placed.
    Victory,
}

/// What a tick did, for cues in the presentation layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    /// The round has not started or is already over; nothing changed.
    Idle,
    Moved,
    FoodEaten,
    Collided(DeathReason),
    BoardFilled,
}

/// Whether the loop should keep running after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    /// The input was the sound key; the shell owns the sound state.
    ToggleSound,
    Quit,
}

/// Tunable scoring rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Rules {
    pub food_reward: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            food_reward: DEFAULT_FOOD_REWARD,
        }
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rules: Rules,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize, rules: Rules) -> Self {
        Self::with_rng(bounds, rules, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, Rules::default(), StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rules: Rules, rng: StdRng) -> Self {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let snake = Snake::new(spawn_point(bounds), Direction::Right);
        let mut session = Self {
            food: snake.head(),
            snake,
            score: 0,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            bounds,
            rules,
            rng,
        };
        session.reset();
        session
    }

    /// Starts a fresh round on the same board, keeping the RNG stream.
    pub fn reset(&mut self) {
        self.snake = Snake::new(spawn_point(self.bounds), Direction::Right);
        self.score = 0;
        self.tick_count = 0;
        self.death_reason = None;
        self.status = GameStatus::Playing;

        match spawn_position(&mut self.rng, self.bounds, &self.snake) {
            Some(food) => self.food = food,
            None => {
                // Single-cell board: nothing left to eat.
                self.food = self.snake.head();
                self.status = GameStatus::Victory;
            }
        }
    }

    /// Holds the current round until the player presses a key.
    pub fn hold_for_start(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Ready;
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickEvent {
        if self.status != GameStatus::Playing {
            return TickEvent::Idle;
        }

        self.tick_count += 1;

        match self.snake.advance(self.bounds, self.food) {
            MoveOutcome::Moved => TickEvent::Moved,
            MoveOutcome::Collided(reason) => {
                self.status = GameStatus::GameOver;
                self.death_reason = Some(reason);
                TickEvent::Collided(reason)
            }
            MoveOutcome::AteFood => {
                self.score = self.score.saturating_add(self.rules.food_reward);

                match spawn_position(&mut self.rng, self.bounds, &self.snake) {
                    Some(food) => {
                        self.food = food;
                        TickEvent::FoodEaten
                    }
                    None => {
                        self.status = GameStatus::Victory;
                        TickEvent::BoardFilled
                    }
                }
            }
        }
    }

    /// Queues a heading change for the next tick. Ignored once the round is over.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing {
            self.snake.change_direction(direction);
        }
    }

    /// Vector form of [`GameSession::change_direction`]; non-unit vectors are ignored.
    pub fn steer(&mut self, dx: i32, dy: i32) {
        if let Some(direction) = Direction::from_delta(dx, dy) {
            self.change_direction(direction);
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) -> Control {
        match input {
            GameInput::Direction(direction) => self.change_direction(direction),
            GameInput::Restart => match self.status {
                GameStatus::Ready => self.status = GameStatus::Playing,
                GameStatus::GameOver | GameStatus::Victory => self.reset(),
                GameStatus::Playing => {}
            },
            GameInput::ToggleSound => return Control::ToggleSound,
            GameInput::Quit => return Control::Quit,
        }

        Control::Continue
    }

    /// True once the round has ended, by collision or by filling the board.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::GameOver | GameStatus::Victory)
    }

    /// True while any key press should (re)start play.
    #[must_use]
    pub fn awaits_start(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }
}

fn spawn_point(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}
