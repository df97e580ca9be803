//! # Animation Timeline
//!
//! In-memory [`AnimationEngine`]: each committed transaction becomes a set of
//! property tracks interpolated on every [`Timeline::advance`] call.
//!
//! ## Semantics
//!
//! - The start value of a track is read from the scene on the first advance
//!   after commit, so the animation starts from wherever the node is then.
//! - Committing a change to a node property that another running
//!   transaction animates takes the property over; the older transaction
//!   keeps its other tracks and still completes on schedule.
//! - The final value is written exactly when a step ends; chained steps
//!   start on the following advance.

use std::time::Duration;

use cgmath::Vector3;
use log::{trace, warn};

use super::curve::TimingFunction;
use super::handle::{AnimationHandle, CompletionSender};
use super::traits::AnimationEngine;
use super::transaction::AnimationTransaction;
use crate::scene::{NodeId, NodeProperty, SceneGraph};

#[derive(Debug)]
struct Track {
    node: NodeId,
    property: NodeProperty,
    from: Option<Vector3<f32>>,
    to: Vector3<f32>,
}

#[derive(Debug)]
struct ActiveTransaction {
    elapsed: Duration,
    duration: Duration,
    timing: TimingFunction,
    tracks: Vec<Track>,
    next: Option<AnimationTransaction>,
    completion: CompletionSender,
}

impl ActiveTransaction {
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Animation engine that interpolates transactions on demand
#[derive(Debug, Default)]
pub struct Timeline {
    active: Vec<ActiveTransaction>,
    committed: usize,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of transactions (chains count once) currently running
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of transactions committed so far, chained steps included
    pub fn committed_count(&self) -> usize {
        self.committed
    }

    fn start(&mut self, transaction: AnimationTransaction, completion: CompletionSender) {
        let (step, next) = transaction.into_parts();
        self.committed += 1;

        for change in step.changes() {
            for running in &mut self.active {
                running
                    .tracks
                    .retain(|t| !(t.node == change.node && t.property == change.property));
            }
        }

        trace!(
            "animating {} properties over {:?} ({:?})",
            step.changes().len(),
            step.duration(),
            step.timing_function()
        );

        self.active.push(ActiveTransaction {
            elapsed: Duration::ZERO,
            duration: step.duration(),
            timing: step.timing_function(),
            tracks: step
                .changes()
                .iter()
                .map(|change| Track {
                    node: change.node,
                    property: change.property,
                    from: None,
                    to: change.target,
                })
                .collect(),
            next,
            completion,
        });
    }

    /// Run until every animation (chains included) has finished
    pub fn run_to_completion(&mut self, step: Duration, scene: &mut dyn SceneGraph) {
        while !self.active.is_empty() {
            self.advance(step, scene);
        }
    }
}

impl AnimationEngine for Timeline {
    fn commit(&mut self, transaction: AnimationTransaction) -> AnimationHandle {
        let (completion, handle) = AnimationHandle::channel();
        self.start(transaction, completion);
        handle
    }

    fn advance(&mut self, delta: Duration, scene: &mut dyn SceneGraph) {
        for running in &mut self.active {
            running.elapsed += delta;
            let eased = running.timing.evaluate(running.progress());

            running.tracks.retain_mut(|track| {
                let from = match track.from {
                    Some(from) => from,
                    None => match scene.property(track.node, track.property) {
                        Some(current) => *track.from.insert(current),
                        None => {
                            warn!("dropping animation of unknown node {}", track.node);
                            return false;
                        }
                    },
                };
                let value = if eased >= 1.0 {
                    track.to
                } else {
                    from + (track.to - from) * eased
                };
                scene.set_property(track.node, track.property, value).is_ok()
            });
        }

        let (done, running): (Vec<_>, Vec<_>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(ActiveTransaction::is_complete);
        self.active = running;

        for finished in done {
            match finished.next {
                Some(next) => self.start(next, finished.completion),
                None => finished.completion.complete(),
            }
        }
    }

    fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn approx(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).x.abs() < 1e-5 && (a - b).y.abs() < 1e-5 && (a - b).z.abs() < 1e-5
    }

    #[test]
    fn test_interpolates_with_curve() {
        let mut scene = Scene::new();
        let node = scene.create_node("hero");
        scene.set_scale(node, Vector3::new(0.0, 0.0, 0.0)).unwrap();

        let mut timeline = Timeline::new();
        let mut handle = timeline.commit(
            AnimationTransaction::begin(ms(500))
                .timing(TimingFunction::EaseInEaseOut)
                .set_scale(node, Vector3::new(0.09, 0.09, 0.09)),
        );

        timeline.advance(ms(250), &mut scene);
        assert!(approx(scene.scale(node).unwrap(), Vector3::new(0.045, 0.045, 0.045)));
        assert!(!handle.is_finished());

        timeline.advance(ms(250), &mut scene);
        assert_eq!(scene.scale(node), Some(Vector3::new(0.09, 0.09, 0.09)));
        assert!(handle.is_finished());
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_chain_resolves_after_last_step() {
        let mut scene = Scene::new();
        let node = scene.create_node("picker");

        let mut timeline = Timeline::new();
        let mut handle = timeline.commit(
            AnimationTransaction::begin(ms(50))
                .set_scale(node, Vector3::new(0.8, 0.8, 0.8))
                .then(
                    AnimationTransaction::begin(ms(50)).set_scale(node, Vector3::new(1.0, 1.0, 1.0)),
                ),
        );

        timeline.advance(ms(50), &mut scene);
        assert_eq!(scene.scale(node), Some(Vector3::new(0.8, 0.8, 0.8)));
        assert!(!handle.is_finished());
        assert_eq!(timeline.committed_count(), 2);

        timeline.advance(ms(50), &mut scene);
        assert_eq!(scene.scale(node), Some(Vector3::new(1.0, 1.0, 1.0)));
        assert!(handle.is_finished());
    }

    #[test]
    fn test_newer_transaction_takes_over_property() {
        let mut scene = Scene::new();
        let node = scene.create_node("dragon");

        let mut timeline = Timeline::new();
        let mut first = timeline.commit(
            AnimationTransaction::begin(ms(700)).set_rotation(node, Vector3::new(0.0, 0.25, 0.0)),
        );
        timeline.advance(ms(100), &mut scene);

        let mut second = timeline.commit(
            AnimationTransaction::begin(ms(350)).set_rotation(node, Vector3::new(0.0, 0.0, 0.0)),
        );
        timeline.run_to_completion(ms(50), &mut scene);

        assert_eq!(scene.rotation(node), Some(Vector3::new(0.0, 0.0, 0.0)));
        assert!(first.is_finished());
        assert!(second.is_finished());
    }

    #[test]
    fn test_zero_duration_applies_immediately() {
        let mut scene = Scene::new();
        let node = scene.create_node("n");
        let mut timeline = Timeline::new();
        let handle = timeline.commit(
            AnimationTransaction::begin(Duration::ZERO).set_position(node, Vector3::new(1.0, 2.0, 3.0)),
        );
        timeline.advance(Duration::ZERO, &mut scene);
        assert_eq!(scene.position(node), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(pollster::block_on(handle), Ok(()));
    }

    #[test]
    fn test_unknown_node_still_completes() {
        let mut scene = Scene::new();
        let mut timeline = Timeline::new();
        let mut handle = timeline.commit(
            AnimationTransaction::begin(ms(10)).set_scale(NodeId(99), Vector3::new(1.0, 1.0, 1.0)),
        );
        timeline.advance(ms(10), &mut scene);
        assert!(handle.is_finished());
    }
}
