// MIT/Apache2 License

use super::{
    clip::clip_segment,
    flatten::Polyline,
    line::{bresenham, pixel, wu},
};
use crate::geometry::Point;
use std::ops::Range;

/// How a polyline is turned into pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Stroke {
    pub(crate) width: f32,
    pub(crate) anti_aliasing: bool,
}

impl Stroke {
    /// A one pixel wide aliased stroke, as drawn by the direct drawer.
    pub(crate) const THIN: Stroke = Stroke {
        width: 1.0,
        anti_aliasing: false,
    };

    /// How many pixels a wide stroke extends on each side of the center line. A stroke never needs to reach
    /// further than `limit` pixels to cover the whole surface.
    #[inline]
    fn radius(&self, limit: i32) -> i32 {
        if self.width > 1.0 {
            ((self.width - 1.0) / 2.0).ceil().min(limit as f32) as i32
        } else {
            0
        }
    }
}

/// The pixels covered by a stroke, bucketed per row of the surface.
#[derive(Debug, Clone)]
pub(crate) struct Coverage {
    width: u32,
    // (x, coverage); sorted by x and unique once `finish` has run
    rows: Vec<Vec<(u32, u8)>>,
}

impl Coverage {
    #[inline]
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            rows: vec![vec![]; height as usize],
        }
    }

    #[inline]
    fn add(&mut self, x: i32, y: i32, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 || x as u32 >= self.width {
            return;
        }
        if let Some(row) = self.rows.get_mut(y as usize) {
            row.push((x as u32, coverage));
        }
    }

    fn finish(&mut self) {
        self.rows.iter_mut().for_each(|row| {
            row.sort_unstable_by_key(|(x, _)| *x);
            row.dedup_by(|later, earlier| {
                if later.0 == earlier.0 {
                    earlier.1 = earlier.1.max(later.1);
                    true
                } else {
                    false
                }
            });
        });
    }

    /// The plotted pixels of row `y`.
    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[(u32, u8)] {
        self.rows.get(y).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The range of rows that have at least one plotted pixel.
    pub(crate) fn touched_rows(&self) -> Option<Range<usize>> {
        let first = self.rows.iter().position(|row| !row.is_empty())?;
        let last = self.rows.iter().rposition(|row| !row.is_empty())?;
        Some(first..last + 1)
    }

    /// Every plotted pixel, row by row.
    pub(crate) fn pixels(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().map(move |(x, coverage)| (*x, y as u32, *coverage))
        })
    }
}

/// Rasterize the outlines of a set of polylines onto a grid of the given size.
pub(crate) fn rasterize(polylines: &[Polyline], stroke: Stroke, width: u32, height: u32) -> Coverage {
    let mut coverage = Coverage::new(width, height);
    let (right, bottom) = (clamp_extent(width), clamp_extent(height));
    let radius = stroke.radius(right.max(bottom));

    // anything further out than this cannot touch the surface
    let margin = (radius + 1) as f32;
    let min = Point::new(-margin, -margin);
    let max = Point::new(width as f32 + margin, height as f32 + margin);

    let stamp = |coverage: &mut Coverage, x: i32, y: i32, c: u8| {
        if radius == 0 {
            coverage.add(x, y, c);
        } else {
            let xs = (x - radius).max(0)..=(x + radius).min(right - 1);
            for sy in (y - radius).max(0)..=(y + radius).min(bottom - 1) {
                for sx in xs.clone() {
                    coverage.add(sx, sy, c);
                }
            }
        }
    };

    for polyline in polylines {
        match polyline.points.as_slice() {
            [] => {}
            [single] => stamp(&mut coverage, pixel(single.x), pixel(single.y), u8::MAX),
            points => {
                for pair in points.windows(2) {
                    let (from, to) = match clip_segment(pair[0], pair[1], min, max) {
                        Some(clipped) => clipped,
                        None => continue,
                    };

                    if stroke.anti_aliasing && radius == 0 {
                        wu(from.x, from.y, to.x, to.y, |x, y, c| {
                            let c = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
                            stamp(&mut coverage, x, y, c)
                        });
                    } else {
                        bresenham(
                            pixel(from.x),
                            pixel(from.y),
                            pixel(to.x),
                            pixel(to.y),
                            |x, y| stamp(&mut coverage, x, y, u8::MAX),
                        );
                    }
                }
            }
        }
    }

    coverage.finish();
    coverage
}

/// A surface extent as a signed pixel count, kept small enough that stamping around it cannot overflow.
#[inline]
fn clamp_extent(extent: u32) -> i32 {
    extent.min(i32::MAX as u32 / 4) as i32
}
