// MIT/Apache2 License

//! Running one unit of drawing work under different invocation conventions.
//!
//! A [`Job`] is written once against [`ExecutionContext`]. Every convention is an adapter that picks the
//! context, decides where the job runs, and shapes the result the caller gets back.

use crate::{
    context::{ProgressTracker, TrackedContext, DEFAULT_CONTEXT},
    Color, DirectDrawer, Error, ExecutionContext, ParallelConfig, PathRenderer, RenderJob,
    ShapeRequest, SharedSurface, Surface,
};
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

mod handle;
pub use handle::*;

#[cfg(feature = "async")]
mod future;
#[cfg(feature = "async")]
pub use future::*;

/// What a job does once it runs.
#[derive(Debug, Clone)]
pub(crate) enum Work {
    /// Draw a thin, opaque shape straight onto the surface.
    Direct {
        shape: ShapeRequest<f32>,
        color: Color,
    },
    /// Stroke a path through the general pipeline.
    Render(RenderJob),
}

/// A classified, lowered drawing request, ready to run.
#[derive(Clone)]
pub struct Job {
    pub(crate) work: Work,
    pub(crate) direct: Arc<dyn DirectDrawer>,
    pub(crate) renderer: Arc<dyn PathRenderer>,
}

impl Job {
    /// Does this job take the fast path?
    #[inline]
    pub fn is_direct(&self) -> bool {
        matches!(self.work, Work::Direct { .. })
    }

    /// Run the job on the surface.
    ///
    /// Returns `Ok(false)` if the context was canceled before the job finished. Direct jobs only check for
    /// cancellation before they start and never report progress. Rendered jobs report 100% progress exactly
    /// once when they finish.
    pub fn run(&self, surface: &mut dyn Surface, context: &dyn ExecutionContext) -> crate::Result<bool> {
        if context.is_canceled() {
            return Ok(false);
        }

        match &self.work {
            Work::Direct { shape, color } => {
                self.direct.draw(surface, shape, *color)?;
                Ok(true)
            }
            Work::Render(job) => {
                let tracker = ProgressTracker::new(context.progress(), job.kind);
                let tracked = TrackedContext {
                    inner: context,
                    tracker: &tracker,
                };

                let finished = self.renderer.render(surface, job, &tracked)?;
                if finished {
                    tracker.complete();
                }
                Ok(finished)
            }
        }
    }

    /// Run the job, turning a panic anywhere inside of it into an error.
    fn run_guarded(&self, surface: &mut dyn Surface, context: &dyn ExecutionContext) -> crate::Result<bool> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.run(surface, context))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(&*payload);
                log::error!("Drawing operation panicked: {}", message);
                Err(Error::OperationFault(message))
            }
        }
    }

    /// Run the job on a shared surface, holding its lock for the whole run.
    fn run_shared<S: Surface>(self, surface: &SharedSurface<S>, config: &crate::AsyncConfig) -> crate::Result<bool> {
        let mut guard = surface.lock().map_err(|_| {
            log::warn!("Surface lock was poisoned by an earlier operation");
            Error::fault("the surface lock was poisoned")
        })?;

        let finished = self.run_guarded(&mut *guard, &config.config)?;
        if !finished && config.throw_if_canceled {
            Err(Error::Canceled)
        } else {
            Ok(finished)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "a drawing worker panicked".to_string()
    }
}

/// A way of invoking a drawing operation against a target.
pub trait Convention<T> {
    /// What the caller gets back.
    type Output;

    fn invoke(self, target: T, job: Job) -> crate::Result<Self::Output>;
}

/// Run on the calling thread with the default context, which cannot be canceled.
#[derive(Debug, Default, Copy, Clone)]
pub struct Blocking;

/// Run on the calling thread with the cancellation, progress and worker settings of a [`ParallelConfig`].
#[derive(Debug, Copy, Clone)]
pub struct Parallel<'c>(pub &'c ParallelConfig);

/// Run on the calling thread with a caller supplied context, or the default context if there is none.
#[derive(Copy, Clone)]
pub struct WithContext<'c>(pub Option<&'c dyn ExecutionContext>);

/// Start running in the background and return a [`DrawHandle`].
#[derive(Debug, Default, Clone)]
pub struct Begin(pub crate::AsyncConfig);

impl<'s, S: Surface + ?Sized> Convention<&'s mut S> for Blocking {
    type Output = ();

    #[inline]
    fn invoke(self, mut target: &'s mut S, job: Job) -> crate::Result {
        job.run_guarded(&mut target, &DEFAULT_CONTEXT).map(drop)
    }
}

impl<'c, 's, S: Surface + ?Sized> Convention<&'s mut S> for Parallel<'c> {
    type Output = bool;

    #[inline]
    fn invoke(self, mut target: &'s mut S, job: Job) -> crate::Result<bool> {
        job.run_guarded(&mut target, self.0)
    }
}

impl<'c, 's, S: Surface + ?Sized> Convention<&'s mut S> for WithContext<'c> {
    type Output = bool;

    #[inline]
    fn invoke(self, mut target: &'s mut S, job: Job) -> crate::Result<bool> {
        let context = self.0.unwrap_or(&DEFAULT_CONTEXT);
        job.run_guarded(&mut target, context)
    }
}

impl<S: Surface + 'static> Convention<SharedSurface<S>> for Begin {
    type Output = DrawHandle;

    fn invoke(self, target: SharedSurface<S>, job: Job) -> crate::Result<DrawHandle> {
        let Begin(config) = self;

        if job.is_direct() {
            // the fast path is not worth a trip to the pool
            return Ok(DrawHandle::completed(job.run_shared(&target, &config)));
        }

        let (handle, completer) = DrawHandle::pending();
        rayon::spawn(move || completer.complete(job.run_shared(&target, &config)));
        Ok(handle)
    }
}
