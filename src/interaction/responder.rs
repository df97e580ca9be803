//! Tap responses on revealed objects
//!
//! Each attached node cycles through four taps: two idle turns with a step
//! cue, a tilted "climax" pose with its own cue, then a silent return to the
//! neutral pose.

use std::collections::HashMap;
use std::time::Duration;

use cgmath::Vector3;
use log::{debug, trace, warn};

use super::state::{InteractionState, TapPhase};
use crate::animation::{AnimationEngine, AnimationHandle, AnimationTransaction, TimingFunction};
use crate::audio::{AudioEngine, CuePlayer, SoundCue};
use crate::scene::NodeId;

/// A tap delivered by the scene graph's hit testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    /// Pointer/source index reported by the host
    pub source: u32,
    pub node: NodeId,
    /// Hit point in scene space
    pub hit_point: Vector3<f32>,
}

impl TapEvent {
    pub fn on(node: NodeId) -> Self {
        Self {
            source: 0,
            node,
            hit_point: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Press/hover state changes reported alongside taps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickState {
    ClickDown,
    ClickUp,
    Clicked,
}

/// What a tap did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapResponse {
    /// Turned to `yaw` radians with the step cue
    Step { yaw: f32 },
    Climax,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionConfig {
    pub step_cue: SoundCue,
    pub climax_cue: SoundCue,
    /// Magnitude of an idle turn, radians
    pub step_yaw: f32,
    pub step_duration: Duration,
    /// Euler pose of the climax, radians
    pub climax_pose: Vector3<f32>,
    pub climax_duration: Duration,
    pub reset_duration: Duration,
    pub press_scale: f32,
    pub press_duration: Duration,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            step_cue: SoundCue::one_shot("steps.mp3"),
            climax_cue: SoundCue::one_shot("roar.mp3"),
            step_yaw: 0.25,
            step_duration: Duration::from_millis(700),
            climax_pose: Vector3::new(-0.25, 0.0, 0.0),
            climax_duration: Duration::from_millis(350),
            reset_duration: Duration::from_millis(350),
            press_scale: 0.8,
            press_duration: Duration::from_millis(50),
        }
    }
}

impl InteractionConfig {
    pub fn with_cues(mut self, step: SoundCue, climax: SoundCue) -> Self {
        self.step_cue = step;
        self.climax_cue = climax;
        self
    }

    pub fn with_step_yaw(mut self, yaw: f32) -> Self {
        self.step_yaw = yaw;
        self
    }
}

#[derive(Debug, Default)]
pub struct InteractionResponder {
    config: InteractionConfig,
    states: HashMap<NodeId, InteractionState>,
    rest_scales: HashMap<NodeId, Vector3<f32>>,
    cues: CuePlayer,
}

impl InteractionResponder {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            states: HashMap::new(),
            rest_scales: HashMap::new(),
            cues: CuePlayer::new(),
        }
    }

    /// Start responding to taps on `node`. Re-attaching keeps the current state.
    pub fn attach(&mut self, node: NodeId) {
        self.states.entry(node).or_default();
    }

    pub fn detach(&mut self, node: NodeId) {
        self.states.remove(&node);
        self.rest_scales.remove(&node);
    }

    /// Scale `node` settles at once any running animation ends.
    ///
    /// Press feedback springs back to this value, never to the live scale,
    /// so a press during the reveal or during another press still ends at rest.
    pub fn set_rest_scale(&mut self, node: NodeId, scale: Vector3<f32>) {
        self.rest_scales.insert(node, scale);
    }

    /// Recorded resting scale, unit scale if none was set
    pub fn rest_scale(&self, node: NodeId) -> Vector3<f32> {
        self.rest_scales
            .get(&node)
            .copied()
            .unwrap_or(Vector3::new(1.0, 1.0, 1.0))
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.states.contains_key(&node)
    }

    pub fn state(&self, node: NodeId) -> Option<&InteractionState> {
        self.states.get(&node)
    }

    /// Respond to a tap. Returns `None` for nodes that are not attached.
    pub fn on_tap(
        &mut self,
        tap: &TapEvent,
        animation: &mut dyn AnimationEngine,
        audio: &mut dyn AudioEngine,
    ) -> Option<TapResponse> {
        let state = self.states.get_mut(&tap.node)?;
        let phase = state.register_tap();
        debug!("tap on {} -> {:?}", tap.node, phase);

        let (response, pose, duration, cue) = match phase {
            TapPhase::Reset => (
                TapResponse::Reset,
                Vector3::new(0.0, 0.0, 0.0),
                self.config.reset_duration,
                None,
            ),
            TapPhase::Climax => (
                TapResponse::Climax,
                self.config.climax_pose,
                self.config.climax_duration,
                Some(&self.config.climax_cue),
            ),
            TapPhase::Step(turn) => {
                let yaw = turn.sign() * self.config.step_yaw;
                (
                    TapResponse::Step { yaw },
                    Vector3::new(0.0, yaw, 0.0),
                    self.config.step_duration,
                    Some(&self.config.step_cue),
                )
            }
        };

        if let Some(cue) = cue {
            if let Err(e) = self.cues.play(cue, audio) {
                warn!("could not play `{}`: {}", cue.uri, e);
            }
        }
        animation.commit(
            AnimationTransaction::begin(duration)
                .timing(TimingFunction::Linear)
                .set_rotation(tap.node, pose),
        );
        Some(response)
    }

    /// Press/hover notifications carry no behaviour
    pub fn on_click_state(&mut self, node: NodeId, state: ClickState, hit_point: Vector3<f32>) {
        trace!("click state {:?} on {} at {:?}", state, node, hit_point);
    }

    /// Press feedback: shrink slightly, then spring back to the node's
    /// [rest scale](Self::rest_scale).
    ///
    /// The handle resolves after the second step.
    pub fn pulse(&self, node: NodeId, animation: &mut dyn AnimationEngine) -> AnimationHandle {
        let rest_scale = self.rest_scale(node);
        animation.commit(
            AnimationTransaction::begin(self.config.press_duration)
                .timing(TimingFunction::EaseInEaseOut)
                .set_scale(node, rest_scale * self.config.press_scale)
                .then(
                    AnimationTransaction::begin(self.config.press_duration)
                        .timing(TimingFunction::EaseInEaseOut)
                        .set_scale(node, rest_scale),
                ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Timeline;
    use crate::audio::SoundId;
    use crate::error::AudioError;
    use crate::scene::{Scene, SceneGraph};

    #[derive(Default)]
    struct RecordingAudio {
        uris: Vec<String>,
        played: Vec<String>,
        settings: Vec<(f32, bool)>,
        volume: f32,
        looping: bool,
    }

    impl AudioEngine for RecordingAudio {
        fn load_sound(&mut self, uri: &str) -> Result<SoundId, AudioError> {
            self.uris.push(uri.to_string());
            Ok(SoundId(self.uris.len() as u32 - 1))
        }

        fn set_volume(&mut self, _sound: SoundId, volume: f32) {
            self.volume = volume;
        }

        fn set_loop(&mut self, _sound: SoundId, looping: bool) {
            self.looping = looping;
        }

        fn play(&mut self, sound: SoundId) {
            self.played.push(self.uris[sound.0 as usize].clone());
            self.settings.push((self.volume, self.looping));
        }
    }

    struct BrokenAudio;

    impl AudioEngine for BrokenAudio {
        fn load_sound(&mut self, uri: &str) -> Result<SoundId, AudioError> {
            Err(AudioError::LoadFailed {
                uri: uri.to_string(),
                reason: "no device".to_string(),
            })
        }
        fn set_volume(&mut self, _sound: SoundId, _volume: f32) {}
        fn set_loop(&mut self, _sound: SoundId, _looping: bool) {}
        fn play(&mut self, _sound: SoundId) {}
    }

    fn setup() -> (Scene, NodeId, Timeline, RecordingAudio, InteractionResponder) {
        let mut scene = Scene::new();
        let dragon = scene.create_node("dragon");
        let mut responder = InteractionResponder::default();
        responder.attach(dragon);
        (scene, dragon, Timeline::new(), RecordingAudio::default(), responder)
    }

    #[test]
    fn test_cues_on_first_three_taps_only() {
        let (mut scene, dragon, mut timeline, mut audio, mut responder) = setup();
        let tap = TapEvent::on(dragon);

        let mut responses = Vec::new();
        for _ in 0..4 {
            responses.push(responder.on_tap(&tap, &mut timeline, &mut audio).unwrap());
            timeline.run_to_completion(Duration::from_millis(50), &mut scene);
        }

        assert_eq!(
            responses,
            vec![
                TapResponse::Step { yaw: 0.25 },
                TapResponse::Step { yaw: -0.25 },
                TapResponse::Climax,
                TapResponse::Reset,
            ]
        );
        assert_eq!(audio.played, vec!["steps.mp3", "steps.mp3", "roar.mp3"]);
        assert!(audio.settings.iter().all(|&s| s == (1.0, false)));
        assert_eq!(responder.state(dragon), Some(&InteractionState::new()));
        assert_eq!(scene.rotation(dragon), Some(Vector3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_poses_per_tap() {
        let (mut scene, dragon, mut timeline, mut audio, mut responder) = setup();
        let tap = TapEvent::on(dragon);
        let mut poses = Vec::new();
        for _ in 0..3 {
            responder.on_tap(&tap, &mut timeline, &mut audio);
            timeline.run_to_completion(Duration::from_millis(100), &mut scene);
            poses.push(scene.rotation(dragon).unwrap());
        }
        assert_eq!(
            poses,
            vec![
                Vector3::new(0.0, 0.25, 0.0),
                Vector3::new(0.0, -0.25, 0.0),
                Vector3::new(-0.25, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_fifth_tap_repeats_first() {
        let (_scene, dragon, mut timeline, mut audio, mut responder) = setup();
        let tap = TapEvent::on(dragon);
        let first = responder.on_tap(&tap, &mut timeline, &mut audio);
        for _ in 0..3 {
            responder.on_tap(&tap, &mut timeline, &mut audio);
        }
        assert_eq!(responder.on_tap(&tap, &mut timeline, &mut audio), first);
        // Each cue is loaded once and replayed
        assert_eq!(audio.uris, vec!["steps.mp3", "roar.mp3"]);
    }

    #[test]
    fn test_step_turn_is_linear_over_700ms() {
        let (mut scene, dragon, mut timeline, mut audio, mut responder) = setup();
        responder.on_tap(&TapEvent::on(dragon), &mut timeline, &mut audio);

        timeline.advance(Duration::from_millis(350), &mut scene);
        let halfway = scene.rotation(dragon).unwrap();
        assert!((halfway.y - 0.125).abs() < 1e-6);
        assert!(!timeline.is_idle());

        timeline.advance(Duration::from_millis(350), &mut scene);
        assert_eq!(scene.rotation(dragon), Some(Vector3::new(0.0, 0.25, 0.0)));
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_second_turn_goes_back_through_zero() {
        let (mut scene, dragon, mut timeline, mut audio, mut responder) = setup();
        let tap = TapEvent::on(dragon);
        responder.on_tap(&tap, &mut timeline, &mut audio);
        timeline.run_to_completion(Duration::from_millis(100), &mut scene);

        responder.on_tap(&tap, &mut timeline, &mut audio);
        timeline.advance(Duration::from_millis(350), &mut scene);
        assert!(scene.rotation(dragon).unwrap().y.abs() < 1e-6);
        timeline.advance(Duration::from_millis(350), &mut scene);
        assert_eq!(scene.rotation(dragon), Some(Vector3::new(0.0, -0.25, 0.0)));
    }

    #[test]
    fn test_climax_and_reset_finish_in_350ms() {
        let (mut scene, dragon, mut timeline, mut audio, mut responder) = setup();
        let tap = TapEvent::on(dragon);
        for _ in 0..2 {
            responder.on_tap(&tap, &mut timeline, &mut audio);
            timeline.run_to_completion(Duration::from_millis(100), &mut scene);
        }

        assert_eq!(responder.on_tap(&tap, &mut timeline, &mut audio), Some(TapResponse::Climax));
        timeline.advance(Duration::from_millis(175), &mut scene);
        let tilting = scene.rotation(dragon).unwrap();
        assert!((tilting.x + 0.125).abs() < 1e-6);
        assert!((tilting.y + 0.125).abs() < 1e-6);
        timeline.advance(Duration::from_millis(175), &mut scene);
        assert_eq!(scene.rotation(dragon), Some(Vector3::new(-0.25, 0.0, 0.0)));
        assert!(timeline.is_idle());

        assert_eq!(responder.on_tap(&tap, &mut timeline, &mut audio), Some(TapResponse::Reset));
        timeline.advance(Duration::from_millis(349), &mut scene);
        assert!(!timeline.is_idle());
        timeline.advance(Duration::from_millis(1), &mut scene);
        assert_eq!(scene.rotation(dragon), Some(Vector3::new(0.0, 0.0, 0.0)));
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_overlapping_turns_take_over_rotation() {
        let (_scene, dragon, mut timeline, mut audio, mut responder) = setup();
        let tap = TapEvent::on(dragon);
        responder.on_tap(&tap, &mut timeline, &mut audio);
        responder.on_tap(&tap, &mut timeline, &mut audio);
        assert_eq!(timeline.committed_count(), 2);
    }

    #[test]
    fn test_unattached_node_is_ignored() {
        let (_scene, _dragon, mut timeline, mut audio, mut responder) = setup();
        assert_eq!(
            responder.on_tap(&TapEvent::on(NodeId(77)), &mut timeline, &mut audio),
            None
        );
        assert!(audio.played.is_empty());
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_audio_failure_still_animates() {
        let (mut scene, dragon, mut timeline, _audio, mut responder) = setup();
        let response = responder.on_tap(&TapEvent::on(dragon), &mut timeline, &mut BrokenAudio);
        assert_eq!(response, Some(TapResponse::Step { yaw: 0.25 }));
        timeline.run_to_completion(Duration::from_millis(100), &mut scene);
        assert_eq!(scene.rotation(dragon), Some(Vector3::new(0.0, 0.25, 0.0)));
    }

    #[test]
    fn test_pulse_returns_to_rest_scale() {
        let (mut scene, dragon, mut timeline, _audio, mut responder) = setup();
        let rest = Vector3::new(2.0, 2.0, 2.0);
        scene.set_scale(dragon, rest).unwrap();
        responder.set_rest_scale(dragon, rest);
        let mut handle = responder.pulse(dragon, &mut timeline);

        timeline.advance(Duration::from_millis(50), &mut scene);
        assert_eq!(scene.scale(dragon), Some(Vector3::new(1.6, 1.6, 1.6)));
        assert!(!handle.is_finished());

        timeline.advance(Duration::from_millis(50), &mut scene);
        assert_eq!(scene.scale(dragon), Some(rest));
        assert!(handle.is_finished());
    }

    #[test]
    fn test_repeated_press_still_ends_at_rest() {
        let (mut scene, dragon, mut timeline, _audio, mut responder) = setup();
        let rest = Vector3::new(0.09, 0.09, 0.09);
        scene.set_scale(dragon, rest).unwrap();
        responder.set_rest_scale(dragon, rest);

        responder.pulse(dragon, &mut timeline);
        timeline.advance(Duration::from_millis(50), &mut scene);
        responder.pulse(dragon, &mut timeline);
        timeline.run_to_completion(Duration::from_millis(10), &mut scene);

        assert_eq!(scene.scale(dragon), Some(rest));
    }

    #[test]
    fn test_rest_scale_defaults_to_unit() {
        let (_scene, dragon, _timeline, _audio, mut responder) = setup();
        assert_eq!(responder.rest_scale(dragon), Vector3::new(1.0, 1.0, 1.0));
        responder.set_rest_scale(dragon, Vector3::new(0.5, 0.5, 0.5));
        responder.detach(dragon);
        assert_eq!(responder.rest_scale(dragon), Vector3::new(1.0, 1.0, 1.0));
    }
}
