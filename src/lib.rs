// src/lib.rs
//! Haggis AR
//!
//! Image-marker anchoring for AR scenes: bind printed markers to scene nodes,
//! reveal the bound object once on first detection and drive its tap
//! interactions. Rendering, tracking and audio are delegated to host engines
//! behind traits; in-memory implementations of each are provided.

pub mod animation;
pub mod assembly;
pub mod assets;
pub mod audio;
pub mod binding;
pub mod error;
pub mod interaction;
pub mod prelude;
pub mod reveal;
pub mod scene;
pub mod session;
pub mod thread;
pub mod tracking;

// Re-export main types for convenience
pub use session::{ArSession, SessionConfig};

/// Install the `env_logger` backend, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(cfg!(test))
        .try_init();
}
