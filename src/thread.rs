use std::thread::{self, ThreadId};

/// The thread the session was created on.
///
/// Tracking callbacks, tap handlers and animation commits all run on this
/// thread. Other threads hand work over through an
/// [`EventSender`](crate::session::EventSender).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlThread {
    id: ThreadId,
}

impl ControlThread {
    /// Capture the calling thread
    pub fn current() -> Self {
        Self {
            id: thread::current().id(),
        }
    }

    pub fn id(&self) -> ThreadId {
        self.id
    }

    pub fn is_current(&self) -> bool {
        thread::current().id() == self.id
    }

    #[track_caller]
    pub fn debug_assert_current(&self) {
        debug_assert!(
            self.is_current(),
            "called off the control thread ({:?}, expected {:?})",
            thread::current().id(),
            self.id
        );
    }
}

impl Default for ControlThread {
    fn default() -> Self {
        Self::current()
    }
}
