//! Tracking engine traits
//!
//! The tracking engine is an external collaborator: it owns the camera feed
//! and image recognition. The core asks it to search for targets and receives
//! anchors back through [`AnchorListener`].

use super::anchor::Anchor;
use super::target::{MarkerId, MarkerTarget};
use crate::error::TrackingError;

/// Requests the core makes of the tracking engine.
pub trait TrackingEngine {
    /// Start searching for `target`. The returned id is the identity anchors
    /// for this target will carry.
    fn register_search_target(&mut self, target: &MarkerTarget) -> Result<MarkerId, TrackingError>;

    /// Stop searching for a previously registered target.
    fn unregister_search_target(&mut self, marker: &MarkerId) -> Result<(), TrackingError>;
}

/// Callbacks the tracking engine delivers on the control thread.
///
/// Implementations must not panic or return errors to the engine: anchors
/// for unknown or already consumed markers are expected and ignored.
pub trait AnchorListener {
    fn on_anchor_found(&mut self, anchor: &Anchor);

    fn on_anchor_updated(&mut self, anchor: &Anchor);

    fn on_anchor_removed(&mut self, anchor: &Anchor);

    /// Dispatch on the anchor's event kind.
    fn on_anchor(&mut self, anchor: &Anchor) {
        match anchor.event {
            super::AnchorEvent::Found => self.on_anchor_found(anchor),
            super::AnchorEvent::Updated => self.on_anchor_updated(anchor),
            super::AnchorEvent::Removed => self.on_anchor_removed(anchor),
        }
    }
}
