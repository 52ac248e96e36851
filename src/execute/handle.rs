// MIT/Apache2 License

use crate::Error;
use crossbeam_channel::{Receiver, Sender};

/// A drawing operation running in the background.
///
/// Dropping the handle does not stop the operation; use the cancel token in its configuration for that.
#[derive(Debug)]
#[must_use = "the result of a background drawing operation is only available through its handle"]
pub struct DrawHandle {
    receiver: Receiver<crate::Result<bool>>,
}

/// The sending half of a [`DrawHandle`], owned by the worker.
#[derive(Debug)]
pub(crate) struct Completer {
    sender: Sender<crate::Result<bool>>,
}

impl Completer {
    #[inline]
    pub(crate) fn complete(self, result: crate::Result<bool>) {
        // the handle may already be gone, in which case nobody is waiting for the result
        let _ = self.sender.send(result);
    }
}

impl DrawHandle {
    /// A handle for an operation that has not finished yet.
    #[inline]
    pub(crate) fn pending() -> (Self, Completer) {
        let (sender, receiver) = crossbeam_channel::bounded(1);
        (Self { receiver }, Completer { sender })
    }

    /// A handle for an operation that already finished.
    #[inline]
    pub(crate) fn completed(result: crate::Result<bool>) -> Self {
        let (handle, completer) = Self::pending();
        completer.complete(result);
        handle
    }

    /// Has the operation finished?
    #[inline]
    pub fn is_completed(&self) -> bool {
        !self.receiver.is_empty()
    }

    /// Wait for the operation to finish.
    ///
    /// Fails with [`Error::Canceled`] if the operation was canceled, or returns `Ok(false)` if its
    /// configuration opted out of that.
    pub fn end(self) -> crate::Result<bool> {
        self.receiver
            .recv()
            .map_err(|_| Error::fault("the drawing worker went away without finishing"))?
    }
}
