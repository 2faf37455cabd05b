use classic_snake::config::GridSize;
use classic_snake::game::{Control, GameSession, GameStatus, TickEvent};
use classic_snake::input::{Direction, GameInput, map_key};
use classic_snake::snake::{DeathReason, Position, Snake};
use classic_snake::sound::{Cue, SoundCues, announce};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Default)]
struct CueLog(Vec<Cue>);

impl SoundCues for CueLog {
    fn play(&mut self, cue: Cue) {
        self.0.push(cue);
    }
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut session = GameSession::new_with_seed(
        GridSize {
            width: 6,
            height: 4,
        },
        42,
    );
    let mut cues = CueLog::default();

    session.snake = Snake::new(Position { x: 1, y: 1 }, Direction::Right);
    session.food = Position { x: 2, y: 1 };

    let event = session.tick();
    announce(&mut cues, event);
    assert_eq!(event, TickEvent::FoodEaten);
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.score, 10);
    assert_eq!(session.snake.len(), 2);
    assert_eq!(session.snake.head(), Position { x: 2, y: 1 });
    assert!(!session.snake.occupies(session.food));

    session.food = Position { x: 5, y: 3 };
    session.apply_input(GameInput::Direction(Direction::Up));
    let event = session.tick();
    announce(&mut cues, event);
    assert_eq!(event, TickEvent::Moved);
    assert_eq!(session.snake.head(), Position { x: 2, y: 0 });
    assert_eq!(session.snake.len(), 2);

    let event = session.tick();
    announce(&mut cues, event);
    assert_eq!(event, TickEvent::Collided(DeathReason::WallCollision));
    assert_eq!(session.status, GameStatus::GameOver);

    // The transition is reported once; later ticks are silent.
    announce(&mut cues, session.tick());
    assert_eq!(cues.0, vec![Cue::FoodEaten, Cue::GameOver]);

    assert_eq!(session.apply_input(GameInput::Restart), Control::Continue);
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.snake.head(), Position { x: 3, y: 2 });
    assert_eq!(session.score, 0);

    assert_eq!(session.apply_input(GameInput::Quit), Control::Quit);
}

#[test]
fn food_never_lands_on_the_snake_during_a_board_sweep() {
    let bounds = GridSize {
        width: 8,
        height: 8,
    };
    let mut session = GameSession::new_with_seed(bounds, 7);

    // Sweep the board row by row in a serpentine, eating whatever lies ahead.
    let mut ticks = 0;
    while !session.is_finished() && ticks < 2_000 {
        let head = session.snake.head();
        let heading = session.snake.direction();
        let next = match heading {
            Direction::Right if head.x == 7 => Direction::Down,
            Direction::Left if head.x == 0 => Direction::Down,
            Direction::Down if head.x == 7 => Direction::Left,
            Direction::Down if head.x == 0 => Direction::Right,
            other => other,
        };
        session.change_direction(next);

        let length_before = session.snake.len();
        match session.tick() {
            TickEvent::FoodEaten => {
                assert_eq!(session.snake.len(), length_before + 1);
                assert!(!session.snake.occupies(session.food));
            }
            TickEvent::Moved => assert_eq!(session.snake.len(), length_before),
            _ => {}
        }
        ticks += 1;
    }

    assert!(session.is_finished());
}

#[test]
fn held_round_starts_on_a_key_and_sound_key_never_starts_it() {
    let mut session = GameSession::new_with_seed(
        GridSize {
            width: 10,
            height: 10,
        },
        3,
    );
    session.food = Position { x: 0, y: 0 };
    session.hold_for_start();
    assert_eq!(session.tick(), TickEvent::Idle);

    let sound_key = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE);
    let sound_input = map_key(sound_key, session.awaits_start()).expect("m is mapped");
    assert_eq!(session.apply_input(sound_input), Control::ToggleSound);
    assert_eq!(session.status, GameStatus::Ready);

    let any_key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    let start = map_key(any_key, session.awaits_start()).expect("any key starts");
    assert_eq!(session.apply_input(start), Control::Continue);
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.tick(), TickEvent::Moved);
}
