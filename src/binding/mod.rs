//! # Marker Bindings
//!
//! The registry of marker → node bindings and the controller that reacts to
//! tracking events against it.

pub mod controller;
pub mod registry;

pub use controller::{BindingController, EngineContext, MarkerState};
pub use registry::{AnchorRegistry, Binding, BindingId};
