//! A tracking engine driven by hand instead of a camera.
//!
//! Used by the demo and the tests to produce anchors the way a real engine
//! would: only for targets under active search, `Found` on first sighting and
//! `Updated` after that.

use std::collections::{HashMap, HashSet};

use cgmath::Vector3;
use log::{debug, info};

use super::anchor::Anchor;
use super::target::{MarkerId, MarkerTarget, Orientation};
use super::traits::TrackingEngine;
use crate::error::TrackingError;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SearchTarget {
    orientation: Orientation,
    physical_width: f32,
}

#[derive(Debug, Default)]
pub struct SimulatedTracker {
    prefix: String,
    next_id: u32,
    searching: HashMap<MarkerId, SearchTarget>,
    tracked: HashSet<MarkerId>,
    unregistered: Vec<MarkerId>,
}

impl SimulatedTracker {
    /// Ids are assigned as `target-1`, `target-2`, ...
    pub fn new() -> Self {
        Self::with_prefix("target")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: 1,
            ..Default::default()
        }
    }

    pub fn is_searching(&self, marker: &MarkerId) -> bool {
        self.searching.contains_key(marker)
    }

    pub fn search_count(&self) -> usize {
        self.searching.len()
    }

    /// Orientation and printed width of a target under search.
    pub fn search_target(&self, marker: &MarkerId) -> Option<(Orientation, f32)> {
        self.searching
            .get(marker)
            .map(|target| (target.orientation, target.physical_width))
    }

    /// Markers unregistered so far, in order.
    pub fn unregistered(&self) -> &[MarkerId] {
        &self.unregistered
    }

    /// The camera sees `marker` at the given pose.
    ///
    /// Returns `None` when the marker is not under search.
    pub fn sight(
        &mut self,
        marker: &MarkerId,
        position: Vector3<f32>,
        rotation: Vector3<f32>,
    ) -> Option<Anchor> {
        if !self.searching.contains_key(marker) {
            return None;
        }
        if self.tracked.insert(marker.clone()) {
            Some(Anchor::found(marker.clone(), position, rotation))
        } else {
            Some(Anchor::updated(marker.clone(), position, rotation))
        }
    }

    /// The camera lost sight of `marker`.
    pub fn lose(&mut self, marker: &MarkerId) -> Option<Anchor> {
        self.tracked
            .remove(marker)
            .then(|| Anchor::removed(marker.clone()))
    }
}

impl TrackingEngine for SimulatedTracker {
    fn register_search_target(&mut self, target: &MarkerTarget) -> Result<MarkerId, TrackingError> {
        if target.image().is_empty() {
            return Err(TrackingError::Rejected("empty target image".to_string()));
        }
        let width = target.physical_width();
        if width.is_nan() || width <= 0.0 {
            return Err(TrackingError::Rejected(format!(
                "physical width must be positive, got {}",
                target.physical_width()
            )));
        }

        let id = MarkerId::new(format!("{}-{}", self.prefix, self.next_id));
        self.next_id += 1;
        self.searching.insert(
            id.clone(),
            SearchTarget {
                orientation: target.orientation(),
                physical_width: target.physical_width(),
            },
        );
        info!(
            "searching for target `{}` ({:.3} m wide)",
            id,
            target.physical_width()
        );
        Ok(id)
    }

    fn unregister_search_target(&mut self, marker: &MarkerId) -> Result<(), TrackingError> {
        if self.searching.remove(marker).is_none() {
            return Err(TrackingError::UnknownTarget(marker.clone()));
        }
        self.tracked.remove(marker);
        self.unregistered.push(marker.clone());
        debug!("stopped searching for target `{}`", marker);
        Ok(())
    }
}
