//! # Scene Graph Module
//!
//! The binding core only ever mutates the scene through the [`SceneGraph`]
//! trait. [`Scene`] is an arena implementation of it used by the demo and the
//! tests; a host with its own renderer provides its own implementation.
//!
//! ## Key Components
//!
//! - [`SceneGraph`] - position/rotation/scale/visibility mutation and node creation
//! - [`NodeId`] - opaque node handle held by bindings and interaction state
//! - [`Scene`] / [`SceneNode`] - in-memory arena
//! - [`Spotlight`], [`ShadowSurface`], [`Material`] - static content used by scene assembly

pub mod components;
pub mod graph;
pub mod node;
#[allow(clippy::module_inception)]
pub mod scene;

// Re-export main types
pub use components::{LightingModel, Material, ShadowMode, ShadowSurface, Spotlight, Texture};
pub use graph::{NodeId, NodeProperty, SceneGraph};
pub use node::SceneNode;
pub use scene::{Scene, SceneStatistics};
