//! # Reveal Animator
//!
//! The one-time "appear" sequence played when a marker is first confirmed:
//! the object grows from zero to its resting scale while, in a separate and
//! shorter transaction, it slides to a fixed offset from the marker plane.
//!
//! Both transactions are committed back to back and run overlapped. Nothing
//! waits for them; the returned [`RevealHandles`] can be awaited by callers
//! that want to chain work after the reveal.

use std::time::Duration;

use cgmath::Vector3;
use futures::future::try_join;
use log::debug;

use crate::animation::{AnimationEngine, AnimationHandle, AnimationTransaction, TimingFunction};
use crate::error::AnimationError;
use crate::scene::NodeId;

/// Plays the reveal sequence on a node.
///
/// Must be invoked at most once per node per session: a second call restarts
/// the growth animation. The binding controller guarantees this by consuming
/// the marker on first detection.
pub trait Reveal {
    fn reveal(&mut self, node: NodeId, animation: &mut dyn AnimationEngine) -> RevealHandles;
}

/// Completion of the two reveal transactions
#[derive(Debug)]
pub struct RevealHandles {
    pub grow: AnimationHandle,
    pub settle: AnimationHandle,
}

impl RevealHandles {
    /// Resolves once both transactions have finished
    pub async fn finished(self) -> Result<(), AnimationError> {
        try_join(self.grow, self.settle).await.map(|_| ())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub grow_duration: Duration,
    pub grow_timing: TimingFunction,
    /// Resting scale of the revealed object
    pub target_scale: Vector3<f32>,
    pub settle_duration: Duration,
    pub settle_timing: TimingFunction,
    /// Resting position relative to the bound node
    pub settle_offset: Vector3<f32>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            grow_duration: Duration::from_millis(500),
            grow_timing: TimingFunction::EaseInEaseOut,
            target_scale: Vector3::new(0.09, 0.09, 0.09),
            settle_duration: Duration::from_millis(300),
            settle_timing: TimingFunction::Linear,
            settle_offset: Vector3::new(0.0, 0.0, -0.19),
        }
    }
}

impl RevealConfig {
    pub fn with_target_scale(mut self, scale: f32) -> Self {
        self.target_scale = Vector3::new(scale, scale, scale);
        self
    }

    pub fn with_grow(mut self, duration: Duration, timing: TimingFunction) -> Self {
        self.grow_duration = duration;
        self.grow_timing = timing;
        self
    }

    pub fn with_settle(mut self, duration: Duration, offset: Vector3<f32>) -> Self {
        self.settle_duration = duration;
        self.settle_offset = offset;
        self
    }
}

/// Default [`Reveal`] implementation driven by a [`RevealConfig`]
#[derive(Debug, Clone, Default)]
pub struct RevealAnimator {
    config: RevealConfig,
}

impl RevealAnimator {
    pub fn new(config: RevealConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }
}

impl Reveal for RevealAnimator {
    fn reveal(&mut self, node: NodeId, animation: &mut dyn AnimationEngine) -> RevealHandles {
        debug!("revealing node {}", node);
        let grow = animation.commit(
            AnimationTransaction::begin(self.config.grow_duration)
                .timing(self.config.grow_timing)
                .set_scale(node, self.config.target_scale),
        );
        let settle = animation.commit(
            AnimationTransaction::begin(self.config.settle_duration)
                .timing(self.config.settle_timing)
                .set_position(node, self.config.settle_offset),
        );
        RevealHandles { grow, settle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Timeline;
    use crate::scene::{Scene, SceneGraph};

    #[test]
    fn test_reveal_grows_and_settles() {
        let mut scene = Scene::new();
        let hero = scene.create_node("hero");
        scene.set_scale(hero, Vector3::new(0.0, 0.0, 0.0)).unwrap();

        let mut timeline = Timeline::new();
        let mut animator = RevealAnimator::default();
        let mut handles = animator.reveal(hero, &mut timeline);
        assert_eq!(timeline.active_count(), 2);

        // Settle is shorter and finishes first
        timeline.advance(Duration::from_millis(300), &mut scene);
        assert!(handles.settle.is_finished());
        assert!(!handles.grow.is_finished());
        assert_eq!(scene.position(hero), Some(Vector3::new(0.0, 0.0, -0.19)));
        let partial = scene.scale(hero).unwrap().x;
        assert!(partial > 0.0 && partial < 0.09);

        timeline.advance(Duration::from_millis(200), &mut scene);
        assert_eq!(scene.scale(hero), Some(Vector3::new(0.09, 0.09, 0.09)));
        assert_eq!(pollster::block_on(handles.finished()), Ok(()));
    }

    #[test]
    fn test_config_builders() {
        let config = RevealConfig::default()
            .with_target_scale(0.5)
            .with_grow(Duration::from_millis(100), TimingFunction::Bounce)
            .with_settle(Duration::from_millis(50), Vector3::new(0.0, 0.1, 0.0));
        assert_eq!(config.target_scale, Vector3::new(0.5, 0.5, 0.5));
        assert_eq!(config.grow_timing, TimingFunction::Bounce);
        assert_eq!(config.settle_offset, Vector3::new(0.0, 0.1, 0.0));
        assert_eq!(RevealAnimator::new(config.clone()).config(), &config);
    }
}
