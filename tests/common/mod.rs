// MIT/Apache2 License

#![allow(dead_code)]

use chalkline::{
    Bitmap, Color, DirectDrawer, Dispatcher, ExecutionContext, PathRenderer, RenderJob,
    ShapeRequest, SoftwareDirectDrawer, SoftwareRenderer, Surface,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub const SIZE: u32 = 24;

pub fn blank() -> Bitmap {
    Bitmap::new(SIZE, SIZE)
}

pub fn white() -> Bitmap {
    Bitmap::with_background(SIZE, SIZE, Color::WHITE)
}

/// Counts how often each collaborator is used, while still drawing with the software ones.
#[derive(Default)]
pub struct Counting {
    pub direct: AtomicUsize,
    pub rendered: AtomicUsize,
    pub renderer: SoftwareRenderer,
}

impl Counting {
    pub fn direct_calls(&self) -> usize {
        self.direct.load(Ordering::SeqCst)
    }

    pub fn render_calls(&self) -> usize {
        self.rendered.load(Ordering::SeqCst)
    }
}

impl DirectDrawer for Counting {
    fn draw(&self, surface: &mut dyn Surface, shape: &ShapeRequest<f32>, color: Color) -> chalkline::Result {
        self.direct.fetch_add(1, Ordering::SeqCst);
        SoftwareDirectDrawer.draw(surface, shape, color)
    }
}

impl PathRenderer for Counting {
    fn render(
        &self,
        surface: &mut dyn Surface,
        job: &RenderJob,
        context: &dyn ExecutionContext,
    ) -> chalkline::Result<bool> {
        self.rendered.fetch_add(1, Ordering::SeqCst);
        self.renderer.render(surface, job, context)
    }
}

/// A dispatcher that routes through a shared counter.
pub fn counting() -> (Dispatcher, Arc<Counting>) {
    let counter = Arc::new(Counting::default());
    let dispatcher = Dispatcher::new(counter.clone(), counter.clone());
    (dispatcher, counter)
}
