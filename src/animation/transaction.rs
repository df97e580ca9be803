use std::time::Duration;

use cgmath::Vector3;

use super::curve::TimingFunction;
use crate::scene::{NodeId, NodeProperty};

/// A property write to be interpolated by the animation engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyChange {
    pub node: NodeId,
    pub property: NodeProperty,
    pub target: Vector3<f32>,
}

/// A batch of property changes animated together over one duration.
///
/// Transactions can be chained with [`AnimationTransaction::then`]; the engine
/// starts each step when the previous one finishes and resolves the handle
/// only after the last step.
///
/// ```
/// use std::time::Duration;
/// use cgmath::Vector3;
/// use haggis_ar::animation::{AnimationTransaction, TimingFunction};
/// use haggis_ar::scene::NodeId;
///
/// let node = NodeId(3);
/// let press = AnimationTransaction::begin(Duration::from_millis(50))
///     .timing(TimingFunction::EaseInEaseOut)
///     .set_scale(node, Vector3::new(0.8, 0.8, 0.8))
///     .then(
///         AnimationTransaction::begin(Duration::from_millis(50))
///             .set_scale(node, Vector3::new(1.0, 1.0, 1.0)),
///     );
/// assert_eq!(press.total_duration(), Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTransaction {
    duration: Duration,
    timing: TimingFunction,
    changes: Vec<PropertyChange>,
    next: Option<Box<AnimationTransaction>>,
}

impl AnimationTransaction {
    /// Start a linear transaction lasting `duration`
    pub fn begin(duration: Duration) -> Self {
        Self {
            duration,
            timing: TimingFunction::Linear,
            changes: Vec::new(),
            next: None,
        }
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn set(mut self, node: NodeId, property: NodeProperty, target: Vector3<f32>) -> Self {
        self.changes.push(PropertyChange {
            node,
            property,
            target,
        });
        self
    }

    pub fn set_position(self, node: NodeId, position: Vector3<f32>) -> Self {
        self.set(node, NodeProperty::Position, position)
    }

    pub fn set_rotation(self, node: NodeId, rotation: Vector3<f32>) -> Self {
        self.set(node, NodeProperty::Rotation, rotation)
    }

    pub fn set_scale(self, node: NodeId, scale: Vector3<f32>) -> Self {
        self.set(node, NodeProperty::Scale, scale)
    }

    /// Append `next` to the end of this transaction's chain
    pub fn then(mut self, next: AnimationTransaction) -> Self {
        let chained = match self.next.take() {
            Some(existing) => existing.then(next),
            None => next,
        };
        self.next = Some(Box::new(chained));
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn timing_function(&self) -> TimingFunction {
        self.timing
    }

    pub fn changes(&self) -> &[PropertyChange] {
        &self.changes
    }

    pub fn next(&self) -> Option<&AnimationTransaction> {
        self.next.as_deref()
    }

    /// Duration of this step plus every chained step
    pub fn total_duration(&self) -> Duration {
        self.duration + self.next().map_or(Duration::ZERO, Self::total_duration)
    }

    /// Split off the chained remainder
    pub fn into_parts(self) -> (Self, Option<Self>) {
        let next = self.next.map(|next| *next);
        (
            Self {
                next: None,
                ..self
            },
            next,
        )
    }
}
