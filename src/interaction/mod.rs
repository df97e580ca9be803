//! # Interaction
//!
//! Tap-count state machine attached to revealed objects.

pub mod responder;
pub mod state;

pub use responder::{ClickState, InteractionConfig, InteractionResponder, TapEvent, TapResponse};
pub use state::{InteractionState, TapPhase, Turn, TurnDirection};
