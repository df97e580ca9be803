//! # Session
//!
//! [`ArSession`] owns the collaborators and the core components and is the
//! single entry point the host drives from its control thread:
//!
//! ```text
//! host ──anchors──▶ AnchorListener ──▶ BindingController ──▶ Reveal
//!      ──taps─────▶ on_tap ─────────▶ InteractionResponder
//!      ──frames───▶ advance ────────▶ AnimationEngine ──▶ SceneGraph
//! other threads ──EventSender──▶ pump
//! ```

use std::time::Duration;

use cgmath::Vector3;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use log::{debug, info};

use crate::animation::{AnimationEngine, AnimationHandle, Timeline};
use crate::assembly::{AssembledScene, AssemblyConfig, SceneAssembly};
use crate::assets::AssetSource;
use crate::audio::{AudioEngine, SilentAudio};
use crate::binding::{BindingController, EngineContext};
use crate::error::{AssemblyError, BindingError};
use crate::interaction::{ClickState, InteractionConfig, InteractionResponder, TapEvent, TapResponse};
use crate::reveal::{RevealAnimator, RevealConfig};
use crate::scene::{NodeId, Scene, SceneGraph};
use crate::thread::ControlThread;
use crate::tracking::{Anchor, AnchorListener, MarkerId, MarkerTarget, SimulatedTracker, TrackingEngine};

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub assembly: AssemblyConfig,
    pub reveal: RevealConfig,
    pub interaction: InteractionConfig,
}

/// Work produced off the control thread
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Anchor(Anchor),
    Tap(TapEvent),
    ClickState {
        node: NodeId,
        state: ClickState,
        hit_point: Vector3<f32>,
    },
}

/// Clonable, `Send` handle for queueing [`SessionEvent`]s
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: UnboundedSender<SessionEvent>,
}

impl EventSender {
    /// Queue `event` for the next [`ArSession::pump`].
    ///
    /// Returns `false` once the session is gone.
    pub fn send(&self, event: SessionEvent) -> bool {
        self.tx.unbounded_send(event).is_ok()
    }
}

pub struct ArSession<S = Scene, T = SimulatedTracker, A = Timeline, U = SilentAudio> {
    scene: S,
    tracking: T,
    animation: A,
    audio: U,
    config: SessionConfig,
    controller: BindingController,
    responder: InteractionResponder,
    assembled: Option<AssembledScene>,
    events_tx: UnboundedSender<SessionEvent>,
    events_rx: UnboundedReceiver<SessionEvent>,
    thread: ControlThread,
}

impl ArSession {
    /// Session over the in-memory collaborators
    pub fn simulated(config: SessionConfig) -> Self {
        Self::new(
            Scene::new(),
            SimulatedTracker::with_prefix("logo"),
            Timeline::new(),
            SilentAudio::new(),
            config,
        )
    }
}

impl<S, T, A, U> ArSession<S, T, A, U>
where
    S: SceneGraph,
    T: TrackingEngine,
    A: AnimationEngine,
    U: AudioEngine,
{
    /// Create the session. The calling thread becomes the control thread.
    pub fn new(scene: S, tracking: T, animation: A, audio: U, config: SessionConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded();
        Self {
            scene,
            tracking,
            animation,
            audio,
            controller: BindingController::new(Box::new(RevealAnimator::new(config.reveal.clone()))),
            responder: InteractionResponder::new(config.interaction.clone()),
            config,
            assembled: None,
            events_tx,
            events_rx,
            thread: ControlThread::current(),
        }
    }

    /// Build the scene and make the hero respond to taps
    pub fn assemble(&mut self, assets: &dyn AssetSource) -> Result<&AssembledScene, AssemblyError> {
        self.thread.debug_assert_current();
        let built = SceneAssembly::new(self.config.assembly.clone()).assemble(
            &mut self.scene,
            assets,
            &mut self.tracking,
            &mut self.controller,
        )?;
        self.responder.attach(built.hero);
        self.responder
            .set_rest_scale(built.hero, self.config.reveal.target_scale);
        Ok(self.assembled.insert(built))
    }

    /// Link an additional target. See [`BindingController::link_target_with_node`].
    pub fn link_target_with_node(
        &mut self,
        target: MarkerTarget,
        node: NodeId,
    ) -> Result<MarkerId, BindingError> {
        self.thread.debug_assert_current();
        self.controller
            .link_target_with_node(target, node, &mut self.tracking)
    }

    pub fn on_tap(&mut self, tap: &TapEvent) -> Option<TapResponse> {
        self.thread.debug_assert_current();
        self.responder.on_tap(tap, &mut self.animation, &mut self.audio)
    }

    pub fn on_click_state(&mut self, node: NodeId, state: ClickState, hit_point: Vector3<f32>) {
        self.thread.debug_assert_current();
        self.responder.on_click_state(node, state, hit_point);
    }

    /// Play the press feedback on `node`. The hero springs back to its
    /// revealed scale.
    pub fn pulse(&mut self, node: NodeId) -> AnimationHandle {
        self.thread.debug_assert_current();
        self.responder.pulse(node, &mut self.animation)
    }

    /// Advance animations by one frame
    pub fn advance(&mut self, delta: Duration) {
        self.thread.debug_assert_current();
        self.animation.advance(delta, &mut self.scene);
    }

    pub fn event_sender(&self) -> EventSender {
        EventSender {
            tx: self.events_tx.clone(),
        }
    }

    /// Apply every queued event. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        self.thread.debug_assert_current();
        let mut handled = 0;
        // The session holds a sender, so the queue never reports closed
        while let Ok(event) = self.events_rx.try_recv() {
            self.dispatch(event);
            handled += 1;
        }
        if handled > 0 {
            debug!("pumped {} queued events", handled);
        }
        handled
    }

    fn dispatch(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Anchor(anchor) => self.on_anchor(&anchor),
            SessionEvent::Tap(tap) => {
                self.on_tap(&tap);
            }
            SessionEvent::ClickState {
                node,
                state,
                hit_point,
            } => self.on_click_state(node, state, hit_point),
        }
    }

    fn context(&mut self) -> (&mut BindingController, EngineContext<'_>) {
        (
            &mut self.controller,
            EngineContext {
                scene: &mut self.scene,
                tracking: &mut self.tracking,
                animation: &mut self.animation,
            },
        )
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn tracking(&self) -> &T {
        &self.tracking
    }

    pub fn tracking_mut(&mut self) -> &mut T {
        &mut self.tracking
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn controller(&self) -> &BindingController {
        &self.controller
    }

    pub fn responder(&self) -> &InteractionResponder {
        &self.responder
    }

    pub fn assembled(&self) -> Option<&AssembledScene> {
        self.assembled.as_ref()
    }
}

impl<S, T, A, U> AnchorListener for ArSession<S, T, A, U>
where
    S: SceneGraph,
    T: TrackingEngine,
    A: AnimationEngine,
    U: AudioEngine,
{
    fn on_anchor_found(&mut self, anchor: &Anchor) {
        self.thread.debug_assert_current();
        let (controller, mut ctx) = self.context();
        controller.on_anchor_found(anchor, &mut ctx);
    }

    fn on_anchor_updated(&mut self, anchor: &Anchor) {
        self.thread.debug_assert_current();
        let (controller, mut ctx) = self.context();
        controller.on_anchor_updated(anchor, &mut ctx);
    }

    fn on_anchor_removed(&mut self, anchor: &Anchor) {
        self.thread.debug_assert_current();
        let (controller, mut ctx) = self.context();
        controller.on_anchor_removed(anchor, &mut ctx);
    }
}

impl<S, T, A, U> Drop for ArSession<S, T, A, U> {
    fn drop(&mut self) {
        info!("AR session closed");
    }
}
