use super::Cue;

/// One note of a cue melody.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u64,
}

const fn tone(frequency_hz: f32, duration_ms: u64) -> Tone {
    Tone {
        frequency_hz,
        duration_ms,
    }
}

/// Short rising blip.
const FOOD_EATEN: [Tone; 2] = [tone(520.0, 60), tone(780.0, 90)];

/// Falling line, last note held.
const GAME_OVER: [Tone; 4] = [
    tone(440.0, 140),
    tone(330.0, 140),
    tone(247.0, 140),
    tone(165.0, 320),
];

/// C major arpeggio.
const VICTORY: [Tone; 4] = [
    tone(523.0, 110),
    tone(659.0, 110),
    tone(784.0, 110),
    tone(1047.0, 360),
];

/// Notes played, in order, for `cue`.
#[must_use]
pub fn tones_for(cue: Cue) -> &'static [Tone] {
    match cue {
        Cue::FoodEaten => &FOOD_EATEN,
        Cue::GameOver => &GAME_OVER,
        Cue::Victory => &VICTORY,
    }
}
