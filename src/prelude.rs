//! # Haggis AR Prelude
//!
//! Commonly used types and traits in one import:
//!
//! ```rust
//! use haggis_ar::prelude::*;
//!
//! let mut session = ArSession::simulated(SessionConfig::default());
//! let assets = MemoryAssetSource::new().with_asset("logo.png", vec![1u8, 2, 3]);
//! let built = session.assemble(&assets).unwrap().clone();
//!
//! let pose = Vector3::new(0.0, 0.0, -0.5);
//! if let Some(anchor) = session.tracking_mut().sight(&built.marker, pose, pose) {
//!     session.on_anchor(&anchor);
//! }
//! assert!(session.scene().is_effectively_visible(built.group));
//! ```

// Session and configuration
pub use crate::session::{ArSession, EventSender, SessionConfig, SessionEvent};
pub use crate::assembly::{AssembledScene, AssemblyConfig, SceneAssembly};
pub use crate::init_logging;

// Collaborator traits and their in-memory implementations
pub use crate::animation::{AnimationEngine, AnimationHandle, AnimationTransaction, Timeline, TimingFunction};
pub use crate::assets::{AssetSource, DirAssetSource, MemoryAssetSource};
pub use crate::audio::{AudioEngine, SilentAudio, SoundCue};
pub use crate::scene::{NodeId, Scene, SceneGraph};
pub use crate::tracking::{Anchor, AnchorListener, MarkerId, MarkerTarget, Orientation, SimulatedTracker, TrackingEngine};

// Core components
pub use crate::binding::{AnchorRegistry, BindingController, MarkerState};
pub use crate::interaction::{InteractionConfig, InteractionResponder, TapEvent, TapResponse};
pub use crate::reveal::{Reveal, RevealAnimator, RevealConfig};

pub use crate::error::{AssemblyError, AssetError, BindingError};

// Re-export common external dependencies
pub use cgmath::Vector3;
