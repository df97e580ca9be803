//! # Audio
//!
//! Sound cues played by the interaction responder. Playback is delegated to
//! an [`AudioEngine`]; [`SilentAudio`] stands in when the host has none.

use std::collections::HashMap;

use log::debug;

use crate::error::AudioError;

/// Handle to a loaded sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

pub trait AudioEngine {
    /// Load a sound from `uri` and return its handle
    fn load_sound(&mut self, uri: &str) -> Result<SoundId, AudioError>;

    fn set_volume(&mut self, sound: SoundId, volume: f32);

    fn set_loop(&mut self, sound: SoundId, looping: bool);

    /// Start playback. Fire-and-forget.
    fn play(&mut self, sound: SoundId);
}

/// A named one-shot sound and how to play it
#[derive(Debug, Clone, PartialEq)]
pub struct SoundCue {
    pub uri: String,
    pub volume: f32,
    pub looping: bool,
}

impl SoundCue {
    /// Full volume, played once
    pub fn one_shot(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            volume: 1.0,
            looping: false,
        }
    }
}

/// Loads each cue once and replays the cached sound afterwards.
#[derive(Debug, Default)]
pub struct CuePlayer {
    loaded: HashMap<String, SoundId>,
}

impl CuePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play `cue`, loading it on first use
    pub fn play(&mut self, cue: &SoundCue, audio: &mut dyn AudioEngine) -> Result<SoundId, AudioError> {
        let sound = match self.loaded.get(&cue.uri) {
            Some(&sound) => sound,
            None => {
                let sound = audio.load_sound(&cue.uri)?;
                self.loaded.insert(cue.uri.clone(), sound);
                sound
            }
        };
        audio.set_volume(sound, cue.volume);
        audio.set_loop(sound, cue.looping);
        audio.play(sound);
        Ok(sound)
    }
}

/// Audio engine that accepts every request and plays nothing
#[derive(Debug, Default)]
pub struct SilentAudio {
    sounds: Vec<String>,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioEngine for SilentAudio {
    fn load_sound(&mut self, uri: &str) -> Result<SoundId, AudioError> {
        self.sounds.push(uri.to_string());
        Ok(SoundId(self.sounds.len() as u32 - 1))
    }

    fn set_volume(&mut self, _sound: SoundId, _volume: f32) {}

    fn set_loop(&mut self, _sound: SoundId, _looping: bool) {}

    fn play(&mut self, sound: SoundId) {
        if let Some(uri) = self.sounds.get(sound.0 as usize) {
            debug!("(silent) playing `{}`", uri);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingAudio {
        loads: usize,
        plays: Vec<(SoundId, f32, bool)>,
        volume: f32,
        looping: bool,
    }

    impl AudioEngine for CountingAudio {
        fn load_sound(&mut self, uri: &str) -> Result<SoundId, AudioError> {
            if uri.is_empty() {
                return Err(AudioError::LoadFailed {
                    uri: uri.to_string(),
                    reason: "empty uri".to_string(),
                });
            }
            self.loads += 1;
            Ok(SoundId(self.loads as u32))
        }

        fn set_volume(&mut self, _sound: SoundId, volume: f32) {
            self.volume = volume;
        }

        fn set_loop(&mut self, _sound: SoundId, looping: bool) {
            self.looping = looping;
        }

        fn play(&mut self, sound: SoundId) {
            self.plays.push((sound, self.volume, self.looping));
        }
    }

    #[test]
    fn test_cue_loaded_once() {
        let mut audio = CountingAudio::default();
        let mut player = CuePlayer::new();
        let steps = SoundCue::one_shot("steps.mp3");

        let first = player.play(&steps, &mut audio).unwrap();
        let second = player.play(&steps, &mut audio).unwrap();

        assert_eq!(first, second);
        assert_eq!(audio.loads, 1);
        assert_eq!(audio.plays, vec![(first, 1.0, false), (first, 1.0, false)]);
    }

    #[test]
    fn test_load_failure_is_returned() {
        let mut audio = CountingAudio::default();
        let mut player = CuePlayer::new();
        assert!(player.play(&SoundCue::one_shot(""), &mut audio).is_err());
        assert!(audio.plays.is_empty());
    }

    #[test]
    fn test_silent_audio_assigns_ids() {
        let mut audio = SilentAudio::new();
        assert_eq!(audio.load_sound("roar.mp3").unwrap(), SoundId(0));
        assert_eq!(audio.load_sound("steps.mp3").unwrap(), SoundId(1));
    }
}
