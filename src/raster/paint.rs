// MIT/Apache2 License

use crate::{geometry::Point, Brush, Color, DrawingOptions, Gradient};

/// Computes the final color of every covered pixel.
#[derive(Debug)]
pub(crate) struct Shader<'a> {
    source: Source<'a>,
    options: &'a DrawingOptions,
}

#[derive(Debug)]
enum Source<'a> {
    Solid(Color),
    Linear {
        gradient: &'a Gradient,
        // unit direction of the gradient
        direction: (f32, f32),
        // projections of the bounds onto the direction
        start: f32,
        span: f32,
    },
}

impl<'a> Shader<'a> {
    /// Create a shader for a brush. Gradients run across `bounds`, the box around the stroked path.
    pub(crate) fn new(brush: &'a Brush, bounds: (Point, Point), options: &'a DrawingOptions) -> Self {
        let source = match brush {
            Brush::Solid(color) => Source::Solid(*color),
            Brush::LinearGradient { gradient, angle } => {
                let (sin, cos) = angle.radians.sin_cos();
                let (min, max) = bounds;
                let corners = [
                    min,
                    Point::new(max.x, min.y),
                    max,
                    Point::new(min.x, max.y),
                ];
                let projections = corners.iter().map(|c| c.x * cos + c.y * sin);
                let (start, end) = projections.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                    (lo.min(p), hi.max(p))
                });
                Source::Linear {
                    gradient,
                    direction: (cos, sin),
                    start,
                    span: end - start,
                }
            }
        };

        Self { source, options }
    }

    /// The color of the brush at pixel `(x, y)`, before coverage and blending.
    #[inline]
    fn sample(&self, x: u32, y: u32) -> Color {
        match self.source {
            Source::Solid(color) => color,
            Source::Linear {
                gradient,
                direction: (cos, sin),
                start,
                span,
            } => {
                if span <= f32::EPSILON {
                    return gradient.color_at(0.0);
                }
                let projected = x as f32 * cos + y as f32 * sin;
                gradient.color_at((projected - start) / span)
            }
        }
    }

    /// The new color of the pixel at `(x, y)`, which currently holds `dst` and is covered by the stroke to
    /// the given degree.
    pub(crate) fn shade(&self, dst: Color, x: u32, y: u32, coverage: u8) -> Color {
        let src = self.sample(x, y);
        let alpha = ((src.a as u32 * coverage as u32 + 127) / 255) as u8;
        let src = src.with_alpha(alpha);

        let mut out = if self.options.alpha_blending && alpha < u8::MAX {
            src.blend_over(dst)
        } else {
            src
        };

        if let Some(ditherer) = &self.options.ditherer {
            out = ditherer.dither(out, x, y);
        }
        if let Some(quantizer) = &self.options.quantizer {
            out = quantizer.quantize(out);
        }
        out
    }
}
