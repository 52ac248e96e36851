// MIT/Apache2 License

use super::{
    flatten::{bounds, flatten},
    plot::{rasterize, Stroke},
};
use crate::{path::build_path, Color, DirectDrawer, Error, ShapeRequest, Surface};

/// Draws thin strokes by overwriting pixels with the stroke color.
///
/// Shapes are outlined with the same plotting code the [`SoftwareRenderer`](super::SoftwareRenderer) uses
/// for one pixel wide aliased strokes, so both produce the same pixels.
#[derive(Debug, Default, Copy, Clone)]
pub struct SoftwareDirectDrawer;

impl DirectDrawer for SoftwareDirectDrawer {
    fn draw(&self, surface: &mut dyn Surface, shape: &ShapeRequest<f32>, color: Color) -> crate::Result {
        let path = build_path(shape);
        let polylines = flatten(&path);
        if bounds(&polylines)?.is_none() {
            return Ok(());
        }

        let (width, height) = (surface.width(), surface.height());
        let coverage = rasterize(&polylines, Stroke::THIN, width, height);
        let pixels = surface.pixels_mut()?;
        if pixels.len() != width as usize * height as usize {
            return Err(Error::Surface(format!(
                "expected {} pixels, found {}",
                width as usize * height as usize,
                pixels.len()
            )));
        }

        for (x, y, _) in coverage.pixels() {
            pixels[y as usize * width as usize + x as usize] = color;
        }

        surface.flush()
    }
}
