use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector in grid coordinates (y grows downwards).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Maps a unit vector back to a direction. Anything else is `None`.
    #[must_use]
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            _ => None,
        }
    }
}

/// High-level input events consumed by the game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    ToggleSound,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates a raw key event into a game input.
///
/// Quit and sound keys work in every state. While waiting for a round to
/// start every other key press (re)starts; while playing only arrows and WASD
/// are meaningful.
#[must_use]
pub fn map_key(key: KeyEvent, awaiting_start: bool) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    if matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc) {
        return Some(GameInput::Quit);
    }

    if matches!(key.code, KeyCode::Char('m' | 'M')) {
        return Some(GameInput::ToggleSound);
    }

    if awaiting_start {
        return Some(GameInput::Restart);
    }

    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s' | 'S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a' | 'A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('d' | 'D') => Direction::Right,
        _ => return None,
    };

    Some(GameInput::Direction(direction))
}

/// Waits up to `timeout` for the next key event.
///
/// Returns `Ok(None)` when the timeout elapses or a non-key event (resize,
/// focus) arrives; the caller redraws either way.
pub fn next_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(Some(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{Direction, GameInput, direction_change_is_valid, map_key};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reverse_turns_are_invalid() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn only_unit_vectors_map_to_directions() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(direction));
        }

        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn arrows_and_wasd_steer_while_playing() {
        assert_eq!(
            map_key(press(KeyCode::Up), false),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a')), false),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('S')), false),
            Some(GameInput::Direction(Direction::Down))
        );
        assert_eq!(
            map_key(press(KeyCode::Right), false),
            Some(GameInput::Direction(Direction::Right))
        );
        assert_eq!(map_key(press(KeyCode::Char('x')), false), None);
    }

    #[test]
    fn any_key_restarts_a_finished_round_except_quit() {
        assert_eq!(
            map_key(press(KeyCode::Char('x')), true),
            Some(GameInput::Restart)
        );
        assert_eq!(map_key(press(KeyCode::Up), true), Some(GameInput::Restart));
        assert_eq!(map_key(press(KeyCode::Char('q')), true), Some(GameInput::Quit));
        assert_eq!(map_key(press(KeyCode::Char('Q')), true), Some(GameInput::Quit));
    }

    #[test]
    fn quit_keys_work_while_playing() {
        assert_eq!(map_key(press(KeyCode::Esc), false), Some(GameInput::Quit));
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                false
            ),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn m_toggles_sound_in_every_state() {
        assert_eq!(
            map_key(press(KeyCode::Char('m')), false),
            Some(GameInput::ToggleSound)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('M')), true),
            Some(GameInput::ToggleSound)
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(map_key(release, false), None);
        assert_eq!(map_key(release, true), None);
    }
}
