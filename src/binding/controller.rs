//! Binding lifecycle controller
//!
//! Drives each marker through `Registered -> Found -> Consumed`:
//!
//! - **found**: pose the bound node on the anchor (yaw only), show it, reveal
//!   the hero object, then consume the marker: the tracking engine stops
//!   searching for it and the binding leaves the registry.
//! - **removed**: hide the bound node if the marker is still registered.
//! - **updated**: ignored; the pose is applied once, at the founding moment.
//!
//! Anchors for markers the registry does not know are expected (consumed
//! markers, foreign targets) and ignored. Collaborator failures inside a
//! callback are logged and never propagated to the tracking engine.

use std::collections::{HashMap, HashSet};

use log::{debug, error, info, trace, warn};

use super::registry::{AnchorRegistry, BindingId};
use crate::animation::AnimationEngine;
use crate::error::{BindingError, SceneError};
use crate::reveal::Reveal;
use crate::scene::{NodeId, SceneGraph};
use crate::tracking::{Anchor, MarkerId, MarkerTarget, TrackingEngine};

/// Where a marker is in its binding lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerState {
    /// Linked to a node, waiting to be found
    Registered,
    /// Found; the reveal has been started
    Found,
    /// Unregistered after first detection; further anchors are ignored
    Consumed,
}

/// Collaborators a tracking callback may touch
pub struct EngineContext<'a> {
    pub scene: &'a mut dyn SceneGraph,
    pub tracking: &'a mut dyn TrackingEngine,
    pub animation: &'a mut dyn AnimationEngine,
}

pub struct BindingController {
    registry: AnchorRegistry,
    states: HashMap<MarkerId, MarkerState>,
    reveal: Box<dyn Reveal>,
    reveal_target: Option<NodeId>,
    revealed: HashSet<NodeId>,
}

impl BindingController {
    pub fn new(reveal: Box<dyn Reveal>) -> Self {
        Self {
            registry: AnchorRegistry::new(),
            states: HashMap::new(),
            reveal,
            reveal_target: None,
            revealed: HashSet::new(),
        }
    }

    /// Node revealed when a marker is found. Defaults to the bound node.
    pub fn set_reveal_target(&mut self, node: NodeId) {
        self.reveal_target = Some(node);
    }

    pub fn reveal_target(&self) -> Option<NodeId> {
        self.reveal_target
    }

    pub fn registry(&self) -> &AnchorRegistry {
        &self.registry
    }

    pub fn marker_state(&self, marker: &MarkerId) -> Option<MarkerState> {
        self.states.get(marker).copied()
    }

    /// Ask the tracking engine to search for `target` and show `node` when it
    /// is found.
    ///
    /// # Returns
    /// The identity the tracking engine assigned to the target
    pub fn link_target_with_node(
        &mut self,
        target: MarkerTarget,
        node: NodeId,
        tracking: &mut dyn TrackingEngine,
    ) -> Result<MarkerId, BindingError> {
        let marker = tracking.register_search_target(&target)?;
        if let Err(e) = self.bind(marker.clone(), target, node) {
            // Registry refused: stop the search we just started
            if let Err(unregister) = tracking.unregister_search_target(&marker) {
                warn!("failed to roll back search target `{}`: {}", marker, unregister);
            }
            return Err(e);
        }
        Ok(marker)
    }

    /// Bind a target the tracking engine has already registered as `marker`
    pub fn bind(
        &mut self,
        marker: MarkerId,
        target: MarkerTarget,
        node: NodeId,
    ) -> Result<BindingId, BindingError> {
        match self.registry.register(marker.clone(), target, node) {
            Ok(id) => {
                info!("marker `{}` linked to node {}", marker, node);
                self.states.insert(marker, MarkerState::Registered);
                Ok(id)
            }
            Err(e) => {
                error!("cannot link marker `{}`: {}", marker, e);
                Err(e)
            }
        }
    }

    pub fn on_anchor_found(&mut self, anchor: &Anchor, ctx: &mut EngineContext<'_>) {
        let Some(binding) = self.registry.lookup(&anchor.id) else {
            debug!("ignoring found anchor for unknown marker `{}`", anchor.id);
            return;
        };
        let node = binding.node();

        log_scene_result(ctx.scene.set_position(node, anchor.position), "set position");
        log_scene_result(
            ctx.scene.set_rotation(node, anchor.yaw_only_rotation()),
            "set rotation",
        );
        log_scene_result(ctx.scene.set_visible(node, true), "show node");
        self.states.insert(anchor.id.clone(), MarkerState::Found);
        info!("marker `{}` found, node {} placed", anchor.id, node);

        let hero = self.reveal_target.unwrap_or(node);
        if self.revealed.insert(hero) {
            // Fire-and-forget: the handles are not awaited
            let _handles = self.reveal.reveal(hero, ctx.animation);
        } else {
            warn!("node {} was already revealed; skipping", hero);
        }

        self.consume(&anchor.id, ctx.tracking);
    }

    pub fn on_anchor_updated(&mut self, anchor: &Anchor, _ctx: &mut EngineContext<'_>) {
        trace!("anchor `{}` updated", anchor.id);
    }

    pub fn on_anchor_removed(&mut self, anchor: &Anchor, ctx: &mut EngineContext<'_>) {
        let Some(binding) = self.registry.lookup(&anchor.id) else {
            debug!("ignoring removed anchor for unknown marker `{}`", anchor.id);
            return;
        };
        let node = binding.node();
        log_scene_result(ctx.scene.set_visible(node, false), "hide node");
        info!("marker `{}` lost, node {} hidden", anchor.id, node);
    }

    /// Stop tracking `marker` and drop its binding
    fn consume(&mut self, marker: &MarkerId, tracking: &mut dyn TrackingEngine) {
        if self.registry.remove(marker).is_none() {
            return;
        }
        if let Err(e) = tracking.unregister_search_target(marker) {
            warn!("failed to unregister marker `{}`: {}", marker, e);
        }
        self.states.insert(marker.clone(), MarkerState::Consumed);
        debug!("marker `{}` consumed", marker);
    }
}

fn log_scene_result(result: Result<(), SceneError>, action: &str) {
    if let Err(e) = result {
        warn!("{} failed: {}", action, e);
    }
}
