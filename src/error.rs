//! Error types shared across the crate.
//!
//! Tracking and tap callbacks never surface these to their caller; they are
//! logged at the callback boundary. Operations the host calls directly
//! (linking targets, assembling the scene, loading assets) return them.

use std::io;

use thiserror::Error;

use crate::scene::NodeId;
use crate::tracking::MarkerId;

/// Errors raised while maintaining marker bindings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The marker id is already present in the registry.
    #[error("marker `{0}` is already registered")]
    DuplicateMarker(MarkerId),

    /// The node already backs another active binding.
    #[error("node {node} is already bound to marker `{marker}`")]
    NodeAlreadyBound { node: NodeId, marker: MarkerId },

    /// The tracking engine refused to search for the target.
    #[error(transparent)]
    Tracking(#[from] TrackingError),
}

/// Errors raised by a scene graph.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown scene node {0}")]
    UnknownNode(NodeId),

    /// Parenting `child` under `parent` would make a node its own ancestor.
    #[error("node {child} cannot be parented under its descendant {parent}")]
    Cycle { parent: NodeId, child: NodeId },
}

/// Errors raised by a tracking engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackingError {
    /// The engine has no active search target with this id.
    #[error("no search target registered as `{0}`")]
    UnknownTarget(MarkerId),

    /// The engine refused the target (bad image, unsupported size, ...).
    #[error("search target rejected: {0}")]
    Rejected(String),
}

/// Errors raised by an audio engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("failed to load sound `{uri}`: {reason}")]
    LoadFailed { uri: String, reason: String },
}

/// Errors raised while reading assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset `{0}` not found")]
    NotFound(String),

    #[error("failed to read asset: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse model `{name}`: {reason}")]
    Model { name: String, reason: String },
}

/// Errors that stop the scene from being assembled.
///
/// Only the marker target is essential; a missing model or texture is logged
/// and assembly carries on.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("marker image unavailable: {0}")]
    MarkerImage(#[source] AssetError),

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors observed while awaiting an animation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    /// The engine dropped the transaction before it finished.
    #[error("animation was dropped before completion")]
    Cancelled,
}
