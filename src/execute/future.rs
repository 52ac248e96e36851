// MIT/Apache2 License

use super::{Convention, Job};
use crate::{util::GenericResult, AsyncConfig, Error, SharedSurface, Surface};
use futures_intrusive::channel::shared::oneshot_channel;
use futures_lite::{future, FutureExt};

/// A drawing operation running in the background, as a future.
pub type DrawFuture = GenericResult<'static, bool>;

/// Start running in the background and return a [`DrawFuture`].
#[derive(Debug, Default, Clone)]
pub struct Spawn(pub AsyncConfig);

impl<S: Surface + 'static> Convention<SharedSurface<S>> for Spawn {
    type Output = DrawFuture;

    fn invoke(self, target: SharedSurface<S>, job: Job) -> crate::Result<DrawFuture> {
        let Spawn(config) = self;

        if job.is_direct() {
            return Ok(future::ready(job.run_shared(&target, &config)).boxed());
        }

        let (sender, receiver) = oneshot_channel();
        rayon::spawn(move || {
            // the future may already be gone, in which case nobody is waiting for the result
            let _ = sender.send(job.run_shared(&target, &config));
        });

        Ok(async move {
            receiver
                .receive()
                .await
                .unwrap_or_else(|| Err(Error::fault("the drawing worker went away without finishing")))
        }
        .boxed())
    }
}
