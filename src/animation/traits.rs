//! Animation engine trait
//!
//! Mirrors the begin/mutate/commit transaction model of the host engine:
//! the core builds an [`AnimationTransaction`] and commits it; the engine
//! interpolates the properties asynchronously.

use std::time::Duration;

use super::handle::AnimationHandle;
use super::transaction::AnimationTransaction;
use crate::scene::SceneGraph;

pub trait AnimationEngine {
    /// Start animating the transaction. Never blocks.
    fn commit(&mut self, transaction: AnimationTransaction) -> AnimationHandle;

    /// Advance running animations by `delta`, writing into `scene`.
    ///
    /// Engines that tick themselves (a host renderer) keep the default no-op.
    fn advance(&mut self, _delta: Duration, _scene: &mut dyn SceneGraph) {}

    /// True when nothing is animating
    fn is_idle(&self) -> bool {
        true
    }
}
