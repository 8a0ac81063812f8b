//! Audio collaborator: synthesized cues for game events.
//!
//! All cues are generated sine tones, no asset files. If no output device
//! exists (CI, headless machines) the manager stays silent and the game
//! runs on; audio failure is never fatal.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};

use crate::constants::*;
use crate::events::GameEvent;

pub struct AudioManager {
    // The stream must stay alive for the handle to keep playing
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl AudioManager {
    pub fn new() -> Self {
        let output = OutputStream::try_default().ok();
        Self { output }
    }

    /// Fire-and-forget cue for one event. Not every event has a sound.
    pub fn handle_event(&self, event: &GameEvent) {
        let tone = match event {
            GameEvent::DoorToggled { .. } => Some(TONE_DOOR),
            GameEvent::LightToggled { .. } | GameEvent::LightExpired { .. } => Some(TONE_LIGHT),
            GameEvent::CameraOpened { .. }
            | GameEvent::CameraClosed
            | GameEvent::CameraSwitched { .. } => Some(TONE_CAMERA),
            GameEvent::StaticBurst { .. } => Some(TONE_STATIC),
            GameEvent::HourAdvanced { .. } => Some(TONE_HOUR),
            GameEvent::Jumpscare { .. } => Some(TONE_JUMPSCARE),
            GameEvent::PowerOut => Some(TONE_POWER_OUT),
            GameEvent::NightComplete { .. } => Some(TONE_VICTORY),
            GameEvent::AnimatronicMoved { .. } | GameEvent::AnimatronicRushed { .. } => None,
        };

        if let Some((freq, duration, amplitude)) = tone {
            self.play_tone(freq, duration, amplitude);
        }
    }

    fn play_tone(&self, freq: f32, duration: f32, amplitude: f32) {
        if let Some((_, handle)) = &self.output {
            let source = SineWave::new(freq)
                .take_duration(Duration::from_secs_f32(duration))
                .amplify(amplitude);
            // A busy or vanished device just drops the cue
            let _ = handle.play_raw(source.convert_samples());
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}
