//! # Tracking
//!
//! Types exchanged with the AR tracking engine: search targets going out,
//! anchors coming back.

pub mod anchor;
pub mod simulated;
pub mod target;
pub mod traits;

pub use anchor::{Anchor, AnchorEvent};
pub use simulated::SimulatedTracker;
pub use target::{MarkerId, MarkerTarget, Orientation};
pub use traits::{AnchorListener, TrackingEngine};
