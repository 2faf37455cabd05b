use std::io::{self, IsTerminal, Write};

use log::{info, warn};

use crate::game::TickEvent;

#[cfg(feature = "audio")]
mod synth;
mod tones;

#[cfg(feature = "audio")]
pub use synth::RodioCues;
pub use tones::{Tone, tones_for};

/// Audible feedback the shell can emit.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cue {
    FoodEaten,
    GameOver,
    Victory,
}

impl Cue {
    /// Picks the cue, if any, announced by a tick.
    #[must_use]
    pub fn for_event(event: TickEvent) -> Option<Self> {
        match event {
            TickEvent::FoodEaten => Some(Self::FoodEaten),
            TickEvent::Collided(_) => Some(Self::GameOver),
            TickEvent::BoardFilled => Some(Self::Victory),
            TickEvent::Idle | TickEvent::Moved => None,
        }
    }
}

/// Optional sound capability. Implementations must never fail the game.
pub trait SoundCues {
    fn play(&mut self, cue: Cue);
}

/// Used when no output device is usable.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundCues for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell; one ring per food, more for the end of a round.
///
/// Used when no audio device opens. Falls silent for good after the first
/// write error.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
    broken: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out, broken: false }
    }

    fn ring(&mut self, times: usize) -> io::Result<()> {
        for _ in 0..times {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundCues for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        if self.broken {
            return;
        }

        let times = match cue {
            Cue::FoodEaten => 1,
            Cue::GameOver => 2,
            Cue::Victory => 3,
        };

        if let Err(error) = self.ring(times) {
            warn!("terminal bell failed, continuing without sound: {error}");
            self.broken = true;
        }
    }
}

/// Runtime on/off switch in front of the chosen backend.
pub struct SoundSwitch {
    backend: Box<dyn SoundCues>,
    enabled: bool,
}

impl SoundSwitch {
    #[must_use]
    pub fn new(backend: Box<dyn SoundCues>, enabled: bool) -> Self {
        Self { backend, enabled }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips sound on or off and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

impl SoundCues for SoundSwitch {
    fn play(&mut self, cue: Cue) {
        if self.enabled {
            self.backend.play(cue);
        }
    }
}

/// Plays the cue for `event` on `cues`, if the event has one.
pub fn announce(cues: &mut dyn SoundCues, event: TickEvent) {
    if let Some(cue) = Cue::for_event(event) {
        cues.play(cue);
    }
}

/// Chooses the sound backend for this run, starting switched on or off.
///
/// The backend is opened even when muted so `m` can turn sound on later.
#[must_use]
pub fn select_cues(enabled: bool) -> SoundSwitch {
    if !enabled {
        info!("sound muted by settings");
    }

    SoundSwitch::new(open_backend(), enabled)
}

fn open_backend() -> Box<dyn SoundCues> {
    #[cfg(feature = "audio")]
    {
        match RodioCues::new() {
            Ok(cues) => {
                info!("sound cues use the default audio device");
                return Box::new(cues);
            }
            Err(error) => warn!("no audio device ({error}); falling back to the terminal bell"),
        }
    }

    let stdout = io::stdout();
    if !stdout.is_terminal() {
        warn!("stdout is not a terminal; running without sound");
        return Box::new(Silent);
    }

    info!("sound cues use the terminal bell");
    Box::new(TerminalBell::new(stdout))
}
