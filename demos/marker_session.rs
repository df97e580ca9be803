//! # Marker Session Demo
//!
//! Runs a complete marker session against the in-memory collaborators.
//!
//! ## What this example shows:
//! - Assembling the scene (hidden group, zero-scaled hero, light rig)
//! - The simulated tracker finding the marker and the one-time reveal
//! - The marker being consumed so later sightings are ignored
//! - Cycling the hero through its four tap responses
//!
//! ## Usage:
//! ```bash
//! cargo run --example marker_session
//! cargo run --example marker_session -- path/to/assets
//! ```
//!
//! With an asset directory the demo loads `logo.png`, `Toothless.obj` and
//! `Toothless_Texture.png` from it; otherwise it uses a small built-in model.

use std::time::Duration;

use anyhow::{Context, Result};
use haggis_ar::prelude::*;
use log::info;

/// Tetrahedron standing in for the hero model
const BUILTIN_MODEL: &str = "\
o hero
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
f 1 3 2
f 1 2 4
f 1 4 3
f 2 3 4
";

const FRAME: Duration = Duration::from_millis(16);

fn builtin_assets() -> MemoryAssetSource {
    MemoryAssetSource::new()
        .with_asset("logo.png", b"\x89PNG demo marker".to_vec())
        .with_asset("Toothless.obj", BUILTIN_MODEL)
}

fn run_frames(session: &mut ArSession) -> usize {
    let mut frames = 0;
    while !session.animation().is_idle() {
        session.advance(FRAME);
        frames += 1;
    }
    frames
}

fn main() -> Result<()> {
    init_logging();

    let mut session = ArSession::simulated(SessionConfig::default());
    let built = match std::env::args().nth(1) {
        Some(dir) => session
            .assemble(&DirAssetSource::new(&dir))
            .with_context(|| format!("assembling scene from `{}`", dir))?,
        None => session
            .assemble(&builtin_assets())
            .context("assembling scene from built-in assets")?,
    }
    .clone();
    info!(
        "searching for marker `{}` (model loaded: {})",
        built.marker, built.model_loaded
    );

    // The camera finds the marker half a metre ahead, turned a quarter
    let pose = Vector3::new(0.0, -0.1, -0.5);
    let turn = Vector3::new(0.2, std::f32::consts::FRAC_PI_2, 0.0);
    let anchor = session
        .tracking_mut()
        .sight(&built.marker, pose, turn)
        .context("marker is not under search")?;
    session.on_anchor(&anchor);
    info!("reveal finished after {} frames", run_frames(&mut session));

    // Consumed: the tracker no longer reports it
    assert!(session.tracking_mut().sight(&built.marker, pose, turn).is_none());

    let tap = TapEvent::on(built.hero);
    for _ in 0..4 {
        let handle = session.pulse(built.hero);
        let response = session.on_tap(&tap);
        run_frames(&mut session);
        pollster::block_on(handle)?;
        info!(
            "tap -> {:?}, hero rotation {:?}",
            response,
            session.scene().rotation(built.hero)
        );
    }

    let stats = session.scene().get_statistics();
    info!(
        "{} nodes ({} visible), {} lights, {} triangles",
        stats.node_count, stats.visible_count, stats.light_count, stats.total_triangles
    );
    Ok(())
}
