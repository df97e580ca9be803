use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use crate::error::AnimationError;

/// Resolves when a committed transaction (and its chained steps) finishes.
///
/// Animations are fire-and-forget: dropping the handle does not stop the
/// animation. Keep it only when a continuation has to run afterwards.
#[derive(Debug)]
pub struct AnimationHandle {
    receiver: oneshot::Receiver<()>,
    finished: bool,
}

/// Engine side of an [`AnimationHandle`].
#[derive(Debug)]
pub struct CompletionSender {
    sender: oneshot::Sender<()>,
}

impl CompletionSender {
    /// Mark the animation finished. A dropped handle is not an error.
    pub fn complete(self) {
        let _ = self.sender.send(());
    }
}

impl AnimationHandle {
    pub fn channel() -> (CompletionSender, AnimationHandle) {
        let (sender, receiver) = oneshot::channel();
        (
            CompletionSender { sender },
            AnimationHandle {
                receiver,
                finished: false,
            },
        )
    }

    /// A handle for an animation that already ran to completion
    pub fn completed() -> Self {
        let (sender, handle) = Self::channel();
        sender.complete();
        handle
    }

    /// Non-blocking completion check
    pub fn is_finished(&mut self) -> bool {
        if !self.finished {
            self.finished = matches!(self.receiver.try_recv(), Ok(Some(())));
        }
        self.finished
    }
}

impl Future for AnimationHandle {
    type Output = Result<(), AnimationError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(Ok(()));
        }
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(())) => {
                this.finished = true;
                Poll::Ready(Ok(()))
            }
            Poll::Ready(Err(_)) => Poll::Ready(Err(AnimationError::Cancelled)),
            Poll::Pending => Poll::Pending,
        }
    }
}
