use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use classic_snake::config::THEME_CLASSIC;
use classic_snake::error::AppError;
use classic_snake::game::{Control, GameSession, TickEvent};
use classic_snake::input::{self, map_key};
use classic_snake::logging;
use classic_snake::settings::{Overrides, Settings};
use classic_snake::sound::{self, SoundSwitch};
use classic_snake::terminal_runtime::{Screen, install_panic_hook};
use classic_snake::ui::hud::HudInfo;
use log::{LevelFilter, debug, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file (JSON). Defaults to the per-user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Simulation steps per second.
    #[arg(long = "tick-rate")]
    tick_rate: Option<u32>,

    /// Points per food eaten.
    #[arg(long)]
    reward: Option<u32>,

    /// Start with sound cues off (`m` toggles them in game).
    #[arg(long)]
    mute: bool,

    /// Print the effective settings as JSON and exit.
    #[arg(long = "print-config")]
    print_config: bool,

    /// Log file location.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            grid_width: self.width,
            grid_height: self.height,
            ticks_per_second: self.tick_rate,
            food_reward: self.reward,
            mute: self.mute,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            eprintln!("classic-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), AppError> {
    let settings = Settings::load(cli.config.as_deref())?
        .with_overrides(cli.overrides())
        .validate()?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path, cli.log_level) {
        // Raw mode is not on yet, so the warning is still readable.
        eprintln!("Warning: logging disabled ({}): {error}", log_path.display());
    }

    info!(
        "starting: {}x{} grid, {} ticks/s, {} points per food",
        settings.grid_width, settings.grid_height, settings.ticks_per_second, settings.food_reward
    );

    install_panic_hook();
    let cues = sound::select_cues(settings.sound);
    let mut session = GameSession::new(settings.grid(), settings.rules());
    session.hold_for_start();

    let mut screen = Screen::open()?;
    let result = run(&mut screen, session, cues, &settings);
    let closed = screen.close();

    info!("exiting");
    result?;
    closed?;
    Ok(())
}

fn run(
    screen: &mut Screen,
    mut session: GameSession,
    mut cues: SoundSwitch,
    settings: &Settings,
) -> Result<(), AppError> {
    let tick_interval = settings.tick_interval();
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        let hud_info = HudInfo {
            theme: &THEME_CLASSIC,
            sound_on: cues.is_enabled(),
        };
        screen.draw(&session, &hud_info)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if let Some(key) = input::next_key(timeout)? {
            if let Some(game_input) = map_key(key, session.awaits_start()) {
                let was_waiting = session.awaits_start();
                match session.apply_input(game_input) {
                    Control::Quit => {
                        info!("quit requested with score {}", session.score);
                        return Ok(());
                    }
                    Control::ToggleSound => {
                        let on = cues.toggle();
                        info!("sound {}", if on { "on" } else { "off" });
                    }
                    Control::Continue => {}
                }
                if was_waiting && !session.awaits_start() {
                    info!("round started");
                    next_tick = Instant::now() + tick_interval;
                }
            }
        }

        let now = Instant::now();
        if now < next_tick {
            continue;
        }

        let event = session.tick();
        log_tick(&session, event);
        sound::announce(&mut cues, event);

        next_tick += tick_interval;
        if next_tick < now {
            // Fell behind (suspended terminal, slow draw): skip missed ticks.
            next_tick = now + tick_interval;
        }
    }
}

fn log_tick(session: &GameSession, event: TickEvent) {
    match event {
        TickEvent::FoodEaten => debug!(
            "food eaten at tick {}: score {}, length {}",
            session.tick_count,
            session.score,
            session.snake.len()
        ),
        TickEvent::Collided(reason) => info!(
            "round over after {} ticks: {reason:?}, score {}",
            session.tick_count, session.score
        ),
        TickEvent::BoardFilled => info!("board filled with score {}", session.score),
        TickEvent::Idle | TickEvent::Moved => {}
    }
}
