use std::time::Duration;

use log::warn;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink, StreamError};

use super::{Cue, SoundCues, tones_for};

const VOLUME: f32 = 0.15;

/// Plays each cue as a short sine melody on the default output device.
pub struct RodioCues {
    // Dropping the stream closes the device.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioCues {
    /// Opens the default output device.
    pub fn new() -> Result<Self, StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl SoundCues for RodioCues {
    fn play(&mut self, cue: Cue) {
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(error) => {
                warn!("audio sink unavailable, skipping {cue:?} cue: {error}");
                return;
            }
        };

        for tone in tones_for(cue) {
            sink.append(
                SineWave::new(tone.frequency_hz)
                    .take_duration(Duration::from_millis(tone.duration_ms))
                    .amplify(VOLUME),
            );
        }
        sink.detach();
    }
}
