// MIT/Apache2 License

use crate::ShapeKind;
use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

/// The environment a drawing operation runs in.
///
/// Every operation is written once, against this trait. The different ways of invoking an operation only
/// differ in which context they hand it. Contexts are shared between worker threads, so they must be
/// `Send + Sync`.
pub trait ExecutionContext: Send + Sync {
    /// Has the operation been asked to stop? This is polled cooperatively between units of work.
    fn is_canceled(&self) -> bool;

    /// Where progress reports should be sent, if anywhere.
    fn progress(&self) -> Option<&dyn ProgressSink>;

    /// The largest number of workers a single operation may use. Zero lets the renderer decide.
    fn max_degree_of_parallelism(&self) -> usize;
}

impl<E: ExecutionContext + ?Sized> ExecutionContext for &E {
    #[inline]
    fn is_canceled(&self) -> bool {
        (**self).is_canceled()
    }
    #[inline]
    fn progress(&self) -> Option<&dyn ProgressSink> {
        (**self).progress()
    }
    #[inline]
    fn max_degree_of_parallelism(&self) -> usize {
        (**self).max_degree_of_parallelism()
    }
}

/// The context used when the caller does not supply one. It is never canceled, reports no progress and lets
/// the renderer pick its worker count.
#[derive(Debug, Default, Copy, Clone)]
pub struct DefaultContext;

/// The process-wide default context.
pub static DEFAULT_CONTEXT: DefaultContext = DefaultContext;

impl ExecutionContext for DefaultContext {
    #[inline]
    fn is_canceled(&self) -> bool {
        false
    }
    #[inline]
    fn progress(&self) -> Option<&dyn ProgressSink> {
        None
    }
    #[inline]
    fn max_degree_of_parallelism(&self) -> usize {
        0
    }
}

/// A shareable cancellation flag. Clones observe the same flag.
#[derive(Debug, Default, Clone)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every operation observing this token to stop.
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// A progress report.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawingProgress {
    pub operation: ShapeKind,
    pub current: usize,
    pub maximum: usize,
}

impl DrawingProgress {
    /// Is the operation done?
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.current >= self.maximum
    }
}

/// Receives progress reports. Reports may arrive from any worker thread.
pub trait ProgressSink: Send + Sync {
    fn report(&self, progress: DrawingProgress);
}

impl<F: Fn(DrawingProgress) + Send + Sync> ProgressSink for F {
    #[inline]
    fn report(&self, progress: DrawingProgress) {
        (self)(progress)
    }
}

/// Configuration for synchronous, cancellable drawing.
#[derive(Clone, Default)]
pub struct ParallelConfig {
    /// The largest number of workers to use. Zero lets the renderer decide.
    pub max_workers: usize,
    pub cancel: CancelToken,
    pub progress: Option<Arc<dyn ProgressSink>>,
}

impl fmt::Debug for ParallelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParallelConfig")
            .field("max_workers", &self.max_workers)
            .field("cancel", &self.cancel)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

impl ParallelConfig {
    #[inline]
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    #[inline]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[inline]
    pub fn with_progress(mut self, progress: impl ProgressSink + 'static) -> Self {
        self.progress = Some(Arc::new(progress));
        self
    }
}

impl ExecutionContext for ParallelConfig {
    #[inline]
    fn is_canceled(&self) -> bool {
        self.cancel.is_canceled()
    }
    #[inline]
    fn progress(&self) -> Option<&dyn ProgressSink> {
        self.progress.as_deref()
    }
    #[inline]
    fn max_degree_of_parallelism(&self) -> usize {
        self.max_workers
    }
}

/// Configuration for drawing in the background.
#[derive(Debug, Clone)]
pub struct AsyncConfig {
    pub config: ParallelConfig,
    /// Report cancellation as [`Error::Canceled`](crate::Error::Canceled) rather than as an unsuccessful
    /// result. On by default.
    pub throw_if_canceled: bool,
}

impl Default for AsyncConfig {
    #[inline]
    fn default() -> Self {
        Self::new(ParallelConfig::default())
    }
}

impl AsyncConfig {
    #[inline]
    pub fn new(config: ParallelConfig) -> Self {
        Self {
            config,
            throw_if_canceled: true,
        }
    }

    #[inline]
    pub fn with_throw_if_canceled(mut self, throw_if_canceled: bool) -> Self {
        self.throw_if_canceled = throw_if_canceled;
        self
    }
}

impl From<ParallelConfig> for AsyncConfig {
    #[inline]
    fn from(config: ParallelConfig) -> Self {
        Self::new(config)
    }
}

/// Sits between a renderer and the caller's progress sink, so that the caller sees a well-behaved sequence
/// of reports no matter how the renderer's workers interleave.
///
/// Reports never go backwards, and completion is reported exactly once, by [`ProgressTracker::complete`].
pub struct ProgressTracker<'a> {
    sink: Option<&'a dyn ProgressSink>,
    operation: ShapeKind,
    state: Mutex<TrackerState>,
}

#[derive(Default)]
struct TrackerState {
    current: usize,
    completed: bool,
}

impl<'a> ProgressTracker<'a> {
    #[inline]
    pub fn new(sink: Option<&'a dyn ProgressSink>, operation: ShapeKind) -> Self {
        Self {
            sink,
            operation,
            state: Mutex::new(TrackerState::default()),
        }
    }

    /// Report that the operation is complete. Only the first call has any effect.
    pub fn complete(&self) {
        let sink = match self.sink {
            Some(sink) => sink,
            None => return,
        };

        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        if state.completed {
            return;
        }
        state.completed = true;
        state.current = 100;
        sink.report(DrawingProgress {
            operation: self.operation,
            current: 100,
            maximum: 100,
        });
    }
}

impl<'a> ProgressSink for ProgressTracker<'a> {
    fn report(&self, progress: DrawingProgress) {
        let sink = match self.sink {
            Some(sink) => sink,
            None => return,
        };
        if progress.maximum == 0 {
            return;
        }

        // scale to a percentage, and keep completion for `complete`
        let percent = (progress.current.min(progress.maximum) * 100) / progress.maximum;
        if percent >= 100 {
            return;
        }

        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        if state.completed || percent <= state.current {
            return;
        }
        state.current = percent;
        sink.report(DrawingProgress {
            operation: self.operation,
            current: percent,
            maximum: 100,
        });
    }
}

/// Wraps another context, replacing its progress sink with a tracker.
pub(crate) struct TrackedContext<'a> {
    pub(crate) inner: &'a dyn ExecutionContext,
    pub(crate) tracker: &'a ProgressTracker<'a>,
}

impl<'a> ExecutionContext for TrackedContext<'a> {
    #[inline]
    fn is_canceled(&self) -> bool {
        self.inner.is_canceled()
    }
    #[inline]
    fn progress(&self) -> Option<&dyn ProgressSink> {
        Some(self.tracker)
    }
    #[inline]
    fn max_degree_of_parallelism(&self) -> usize {
        self.inner.max_degree_of_parallelism()
    }
}
