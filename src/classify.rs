// MIT/Apache2 License

//! Decides whether a request can bypass the general rendering pipeline.

use crate::{Color, DrawingOptions, StrokeStyle};

/// The narrowest pen the direct drawer can stand in for.
pub const MIN_THIN_WIDTH: f32 = 0.25;
/// The widest pen the direct drawer can stand in for.
pub const MAX_THIN_WIDTH: f32 = 1.0;

/// Tell whether a color may be drawn directly under the given options.
///
/// The options must request none of the features the direct drawer lacks, and the color must look the same
/// whether it is blended or not.
#[inline]
pub fn color_is_direct(color: Color, options: &DrawingOptions) -> bool {
    !options.anti_aliasing
        && options.is_identity_transform()
        && options.fast_thin_lines
        && options.quantizer.is_none()
        && options.ditherer.is_none()
        && (color.is_opaque() || !options.alpha_blending)
}

/// If a request with this style can take the fast path, return the color it should be drawn with.
///
/// Requests to stroke a prebuilt path never take the fast path.
pub fn fast_path_color(
    style: &StrokeStyle,
    options: &DrawingOptions,
    is_path: bool,
) -> Option<Color> {
    if is_path {
        return None;
    }

    let color = match style {
        StrokeStyle::Color(color) => *color,
        StrokeStyle::Pen(pen) => {
            let width = pen.width();
            if !(MIN_THIN_WIDTH..=MAX_THIN_WIDTH).contains(&width) {
                return None;
            }
            pen.brush().solid_color()?
        }
    };

    if color_is_direct(color, options) {
        Some(color)
    } else {
        None
    }
}
