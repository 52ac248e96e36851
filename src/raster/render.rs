// MIT/Apache2 License

use super::{
    flatten::{bounds, flatten, Polyline},
    paint::Shader,
    plot::{rasterize, Coverage, Stroke},
};
use crate::{DrawingProgress, Error, ExecutionContext, PathRenderer, RenderJob, Surface};
use lyon_path::Path;
use rayon::prelude::*;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex, Weak,
};

/// The number of flattened paths kept around.
const CACHE_CAPACITY: usize = 16;

/// Strokes paths in software, spreading rows across rayon workers.
#[derive(Debug, Default)]
pub struct SoftwareRenderer {
    // flattened forms of cacheable paths, keyed by the path allocation
    cache: Mutex<Vec<(Weak<Path>, Arc<[Polyline]>)>>,
    cache_hits: AtomicUsize,
}

impl SoftwareRenderer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times a flattened path was reused instead of being recomputed.
    #[inline]
    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    fn flattened(&self, job: &RenderJob) -> Arc<[Polyline]> {
        if !job.cacheable {
            return flatten(&job.path).into();
        }

        let mut cache = match self.cache.lock() {
            Ok(cache) => cache,
            Err(poisoned) => {
                log::warn!("Flattening cache was poisoned, clearing it");
                let mut cache = poisoned.into_inner();
                cache.clear();
                cache
            }
        };

        let key = Arc::as_ptr(&job.path);
        let hit = cache
            .iter()
            .find(|(path, _)| path.strong_count() > 0 && Weak::as_ptr(path) == key)
            .map(|(_, polylines)| polylines.clone());
        if let Some(polylines) = hit {
            log::trace!("Reusing flattened {}", job.kind);
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            return polylines;
        }

        let polylines: Arc<[Polyline]> = flatten(&job.path).into();
        cache.retain(|(path, _)| path.strong_count() > 0);
        if cache.len() >= CACHE_CAPACITY {
            cache.remove(0);
        }
        cache.push((Arc::downgrade(&job.path), polylines.clone()));
        polylines
    }
}

impl PathRenderer for SoftwareRenderer {
    fn render(
        &self,
        surface: &mut dyn Surface,
        job: &RenderJob,
        context: &dyn ExecutionContext,
    ) -> crate::Result<bool> {
        if context.is_canceled() {
            return Ok(false);
        }

        let polylines = self.flattened(job);
        let bounds = match bounds(&polylines)? {
            Some(bounds) => bounds,
            None => return Ok(true),
        };

        let (width, height) = (surface.width() as usize, surface.height() as usize);
        let stroke = Stroke {
            width: job.pen.width(),
            anti_aliasing: job.options.anti_aliasing,
        };
        let coverage = rasterize(&polylines, stroke, width as u32, height as u32);
        let rows = match coverage.touched_rows() {
            Some(rows) => rows,
            None => return Ok(true),
        };

        let pixels = surface.pixels_mut()?;
        if pixels.len() != width * height {
            return Err(Error::Surface(format!(
                "expected {} pixels, found {}",
                width * height,
                pixels.len()
            )));
        }

        let shader = Shader::new(job.pen.brush(), bounds, &job.options);
        let band = Band {
            coverage: &coverage,
            shader: &shader,
            context,
            kind: job.kind,
            first_row: rows.start,
            total_rows: rows.len(),
            done: AtomicUsize::new(0),
            canceled: AtomicBool::new(false),
        };
        let target = &mut pixels[rows.start * width..rows.end * width];

        let workers = match context.max_degree_of_parallelism() {
            0 => rayon::current_num_threads(),
            n => n,
        }
        .max(1);

        if workers == 1 {
            band.shade(target, width, 0);
        } else {
            let rows_per_chunk = (rows.len() + workers - 1) / workers;
            log::trace!(
                "Shading {} rows of {} in chunks of {}",
                rows.len(),
                job.kind,
                rows_per_chunk
            );
            target
                .par_chunks_mut(rows_per_chunk * width)
                .enumerate()
                .for_each(|(i, chunk)| band.shade(chunk, width, i * rows_per_chunk));
        }

        // rows shaded before a cancellation stay on the surface
        surface.flush()?;
        Ok(!band.canceled.load(Ordering::Acquire))
    }
}

/// The state shared by every worker shading the rows of one job.
struct Band<'a> {
    coverage: &'a Coverage,
    shader: &'a Shader<'a>,
    context: &'a dyn ExecutionContext,
    kind: crate::ShapeKind,
    first_row: usize,
    total_rows: usize,
    done: AtomicUsize,
    canceled: AtomicBool,
}

impl<'a> Band<'a> {
    /// Shade a run of whole rows. `offset` is the index of the run's first row within the band.
    fn shade(&self, rows: &mut [crate::Color], width: usize, offset: usize) {
        for (i, row) in rows.chunks_mut(width).enumerate() {
            if self.canceled.load(Ordering::Relaxed) || self.context.is_canceled() {
                self.canceled.store(true, Ordering::Release);
                return;
            }

            let y = self.first_row + offset + i;
            for (x, coverage) in self.coverage.row(y) {
                let px = &mut row[*x as usize];
                *px = self.shader.shade(*px, *x, y as u32, *coverage);
            }

            let done = self.done.fetch_add(1, Ordering::AcqRel) + 1;
            if let Some(progress) = self.context.progress() {
                progress.report(DrawingProgress {
                    operation: self.kind,
                    current: done,
                    maximum: self.total_rows,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        context::DEFAULT_CONTEXT, Bitmap, CancelToken, Color, DrawingOptions, ParallelConfig, Pen,
        ShapeKind,
    };
    use euclid::point2;

    fn job(path: Path, pen: Pen, cacheable: bool) -> RenderJob {
        RenderJob {
            path: Arc::new(path),
            pen,
            options: DrawingOptions::default(),
            kind: ShapeKind::Path,
            cacheable,
        }
    }

    fn diagonal() -> Path {
        let mut builder = Path::builder();
        builder.begin(point2(0.0, 0.0));
        builder.line_to(point2(15.0, 15.0));
        builder.end(false);
        builder.build()
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let renderer = SoftwareRenderer::new();
        let job = job(diagonal(), Pen::new(3.0, Color::GREEN).unwrap(), false);

        let mut sequential = Bitmap::new(16, 16);
        let one = ParallelConfig::default().with_max_workers(1);
        assert!(renderer.render(&mut sequential, &job, &one).unwrap());

        let mut parallel = Bitmap::new(16, 16);
        let four = ParallelConfig::default().with_max_workers(4);
        assert!(renderer.render(&mut parallel, &job, &four).unwrap());

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.pixel(8, 8), Some(Color::GREEN));
    }

    #[test]
    fn canceled_jobs_leave_the_surface_alone() {
        let renderer = SoftwareRenderer::new();
        let job = job(diagonal(), Pen::thin(Color::RED), false);
        let cancel = CancelToken::new();
        cancel.cancel();
        let config = ParallelConfig::default().with_cancel(cancel);

        let mut bitmap = Bitmap::new(16, 16);
        assert!(!renderer.render(&mut bitmap, &job, &config).unwrap());
        assert_eq!(bitmap, Bitmap::new(16, 16));
    }

    #[test]
    fn cacheable_paths_are_flattened_once() {
        let renderer = SoftwareRenderer::new();
        let job = job(diagonal(), Pen::thin(Color::RED), true);
        let mut bitmap = Bitmap::new(16, 16);

        renderer.render(&mut bitmap, &job, &DEFAULT_CONTEXT).unwrap();
        renderer.render(&mut bitmap, &job, &DEFAULT_CONTEXT).unwrap();
        assert_eq!(renderer.cache_hits(), 1);

        let fresh = RenderJob {
            cacheable: false,
            ..job
        };
        renderer.render(&mut bitmap, &fresh, &DEFAULT_CONTEXT).unwrap();
        assert_eq!(renderer.cache_hits(), 1);
    }

    #[test]
    fn progress_counts_rows() {
        let renderer = SoftwareRenderer::new();
        let job = job(diagonal(), Pen::thin(Color::RED), false);
        let seen = Arc::new(Mutex::new(vec![]));
        let config = ParallelConfig::default().with_max_workers(1).with_progress({
            let seen = seen.clone();
            move |p: DrawingProgress| seen.lock().unwrap().push((p.current, p.maximum))
        });

        let mut bitmap = Bitmap::new(16, 16);
        renderer.render(&mut bitmap, &job, &config).unwrap();
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 16);
        assert_eq!(seen.last(), Some(&(16, 16)));
    }

    #[test]
    fn extreme_coordinates_fault() {
        let renderer = SoftwareRenderer::new();
        let mut builder = Path::builder();
        builder.begin(point2(0.0, 0.0));
        builder.line_to(point2(1.0e12, 3.0));
        builder.end(false);
        let job = job(builder.build(), Pen::thin(Color::RED), false);

        let mut bitmap = Bitmap::new(4, 4);
        let err = renderer
            .render(&mut bitmap, &job, &DEFAULT_CONTEXT)
            .unwrap_err();
        assert!(matches!(err, Error::OperationFault(_)));
    }

    /// Counts flushes, so that partial renders can be checked for them.
    struct Flushing {
        bitmap: Bitmap,
        flushes: usize,
    }

    impl Surface for Flushing {
        fn width(&self) -> u32 {
            self.bitmap.width()
        }
        fn height(&self) -> u32 {
            self.bitmap.height()
        }
        fn pixels_mut(&mut self) -> crate::Result<&mut [Color]> {
            self.bitmap.pixels_mut()
        }
        fn flush(&mut self) -> crate::Result {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn partial_renders_are_flushed() {
        let renderer = SoftwareRenderer::new();
        let job = job(diagonal(), Pen::thin(Color::RED), false);
        let cancel = CancelToken::new();
        let config = ParallelConfig::default()
            .with_max_workers(1)
            .with_cancel(cancel.clone())
            .with_progress(move |p: DrawingProgress| {
                if p.current == 4 {
                    cancel.cancel();
                }
            });

        let mut surface = Flushing {
            bitmap: Bitmap::new(16, 16),
            flushes: 0,
        };
        assert!(!renderer.render(&mut surface, &job, &config).unwrap());
        assert_eq!(surface.flushes, 1);
        assert_eq!(surface.bitmap.changed_from(Color::TRANSPARENT).len(), 4);
    }
}
