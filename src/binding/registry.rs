//! Anchor registry
//!
//! Maps marker identities to the target being searched for and the scene
//! node that should appear when it is found. Bindings live in an arena and
//! are addressed by generational [`BindingId`]s; the marker index and the
//! node index point into it.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::BindingError;
use crate::scene::NodeId;
use crate::tracking::{MarkerId, MarkerTarget};

/// Handle to a binding slot. Stale after the binding is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId {
    index: u32,
    generation: u32,
}

/// A registered marker and the node it reveals
#[derive(Debug, PartialEq)]
pub struct Binding {
    marker: MarkerId,
    target: MarkerTarget,
    node: NodeId,
}

impl Binding {
    pub fn marker(&self) -> &MarkerId {
        &self.marker
    }

    pub fn target(&self) -> &MarkerTarget {
        &self.target
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn into_parts(self) -> (MarkerId, MarkerTarget, NodeId) {
        (self.marker, self.target, self.node)
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    binding: Option<Binding>,
}

#[derive(Debug, Default)]
pub struct AnchorRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    by_marker: HashMap<MarkerId, BindingId>,
    by_node: HashMap<NodeId, BindingId>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a binding for `marker`.
    ///
    /// # Errors
    /// * [`BindingError::DuplicateMarker`] if the marker is already registered
    /// * [`BindingError::NodeAlreadyBound`] if `node` backs another binding
    pub fn register(
        &mut self,
        marker: MarkerId,
        target: MarkerTarget,
        node: NodeId,
    ) -> Result<BindingId, BindingError> {
        if self.by_marker.contains_key(&marker) {
            return Err(BindingError::DuplicateMarker(marker));
        }
        if let Some(existing) = self.by_node.get(&node).and_then(|&id| self.get(id)) {
            return Err(BindingError::NodeAlreadyBound {
                node,
                marker: existing.marker.clone(),
            });
        }

        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        let id = BindingId {
            index,
            generation: slot.generation,
        };
        slot.binding = Some(Binding {
            marker: marker.clone(),
            target,
            node,
        });

        self.by_marker.insert(marker, id);
        self.by_node.insert(node, id);
        Ok(id)
    }

    /// Binding for `marker`, if registered. Absence is a normal outcome.
    pub fn lookup<Q>(&self, marker: &Q) -> Option<&Binding>
    where
        MarkerId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_marker.get(marker).and_then(|&id| self.get(id))
    }

    pub fn get(&self, id: BindingId) -> Option<&Binding> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.binding.as_ref())
    }

    /// Marker currently bound to `node`
    pub fn marker_for_node(&self, node: NodeId) -> Option<&MarkerId> {
        self.by_node
            .get(&node)
            .and_then(|&id| self.get(id))
            .map(Binding::marker)
    }

    pub fn contains<Q>(&self, marker: &Q) -> bool
    where
        MarkerId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_marker.contains_key(marker)
    }

    /// Remove and return the binding for `marker`. No-op if absent.
    pub fn remove<Q>(&mut self, marker: &Q) -> Option<Binding>
    where
        MarkerId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.by_marker.remove(marker)?;
        let slot = &mut self.slots[id.index as usize];
        let binding = slot.binding.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.by_node.remove(&binding.node);
        Some(binding)
    }

    pub fn len(&self) -> usize {
        self.by_marker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_marker.is_empty()
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerId> {
        self.by_marker.keys()
    }
}
