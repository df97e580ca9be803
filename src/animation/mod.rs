//! # Animation
//!
//! Transaction-based property animation. The core commits
//! [`AnimationTransaction`]s to an [`AnimationEngine`] and receives an
//! [`AnimationHandle`] future that resolves on completion.
//!
//! [`Timeline`] is the in-memory engine; hosts with their own animation
//! system implement [`AnimationEngine`] over it.

pub mod curve;
pub mod handle;
pub mod timeline;
pub mod traits;
pub mod transaction;

pub use curve::TimingFunction;
pub use handle::{AnimationHandle, CompletionSender};
pub use timeline::Timeline;
pub use traits::AnimationEngine;
pub use transaction::{AnimationTransaction, PropertyChange};
