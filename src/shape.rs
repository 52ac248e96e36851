// MIT/Apache2 License

use crate::{
    geometry::{point_to_float, rect_to_float, ArcAngles, Coord, CornerRadii, Point, Rect},
    options::{PixelOffset, Transform},
};
use lyon_path::Path;
use std::{fmt, sync::Arc};

/// A single request to stroke a shape.
///
/// Requests may be expressed in integer or floating point coordinates. Before they are lowered, they are
/// converted to floating point with [`ShapeRequest::normalize`].
#[derive(Debug, Clone)]
pub enum ShapeRequest<C: Coord = f32> {
    /// A single line between two points.
    Line(Point<C>, Point<C>),
    /// Connected lines through every point.
    Polyline(Vec<Point<C>>),
    /// A chain of cubic bezier curves. The first point starts the chain, and every following group of three
    /// points is two control points and an end point.
    Beziers(Vec<Point<C>>),
    /// Connected lines through every point, closed back to the first point.
    Polygon(Vec<Point<C>>),
    /// The outline of a rectangle. The right and bottom edges are inclusive.
    Rectangle(Rect<C>),
    /// The outline of the ellipse inscribed in a rectangle.
    Ellipse(Rect<C>),
    /// A section of the outline of the ellipse inscribed in `bounds`.
    Arc { bounds: Rect<C>, angles: ArcAngles },
    /// An arc closed by two radii through the center of its ellipse.
    Pie { bounds: Rect<C>, angles: ArcAngles },
    /// The outline of a rectangle with rounded corners.
    RoundedRectangle { bounds: Rect<C>, radii: CornerRadii },
    /// An already built path.
    Path(Arc<Path>),
}

/// The kind of a [`ShapeRequest`], without its geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Polyline,
    Beziers,
    Polygon,
    Rectangle,
    Ellipse,
    Arc,
    Pie,
    RoundedRectangle,
    Path,
}

impl ShapeKind {
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Polyline => "lines",
            Self::Beziers => "beziers",
            Self::Polygon => "polygon",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Arc => "arc",
            Self::Pie => "pie",
            Self::RoundedRectangle => "rounded rectangle",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for ShapeKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<C: Coord> ShapeRequest<C> {
    /// The kind of this request.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Line(..) => ShapeKind::Line,
            Self::Polyline(_) => ShapeKind::Polyline,
            Self::Beziers(_) => ShapeKind::Beziers,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Arc { .. } => ShapeKind::Arc,
            Self::Pie { .. } => ShapeKind::Pie,
            Self::RoundedRectangle { .. } => ShapeKind::RoundedRectangle,
            Self::Path(_) => ShapeKind::Path,
        }
    }

    /// Is this a request to stroke an already built path?
    #[inline]
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// Convert this request to floating point coordinates.
    ///
    /// Floating point requests are moved according to `offset`. Integer requests always address pixel
    /// centers and are not moved. Negative rectangle extents are flipped so that every size is positive.
    pub fn normalize(self, offset: PixelOffset) -> ShapeRequest<f32> {
        let shift = if C::FRACTIONAL { offset.shift() } else { 0.0 };
        let points = |points: Vec<Point<C>>| -> Vec<Point<f32>> {
            points
                .into_iter()
                .map(|p| point_to_float(p, shift))
                .collect()
        };

        match self {
            Self::Line(p1, p2) => {
                ShapeRequest::Line(point_to_float(p1, shift), point_to_float(p2, shift))
            }
            Self::Polyline(pts) => ShapeRequest::Polyline(points(pts)),
            Self::Beziers(pts) => ShapeRequest::Beziers(points(pts)),
            Self::Polygon(pts) => ShapeRequest::Polygon(points(pts)),
            Self::Rectangle(bounds) => ShapeRequest::Rectangle(rect_to_float(bounds, shift)),
            Self::Ellipse(bounds) => ShapeRequest::Ellipse(rect_to_float(bounds, shift)),
            Self::Arc { bounds, angles } => ShapeRequest::Arc {
                bounds: rect_to_float(bounds, shift),
                angles,
            },
            Self::Pie { bounds, angles } => ShapeRequest::Pie {
                bounds: rect_to_float(bounds, shift),
                angles,
            },
            Self::RoundedRectangle { bounds, radii } => ShapeRequest::RoundedRectangle {
                bounds: rect_to_float(bounds, shift),
                radii,
            },
            Self::Path(path) => {
                if shift == 0.0 {
                    ShapeRequest::Path(path)
                } else {
                    let moved = (*path).clone().transformed(&Transform::translation(shift, shift));
                    ShapeRequest::Path(Arc::new(moved))
                }
            }
        }
    }
}

// paths compare by identity
impl<C: Coord> PartialEq for ShapeRequest<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Line(a1, a2), Self::Line(b1, b2)) => a1 == b1 && a2 == b2,
            (Self::Polyline(a), Self::Polyline(b))
            | (Self::Beziers(a), Self::Beziers(b))
            | (Self::Polygon(a), Self::Polygon(b)) => a == b,
            (Self::Rectangle(a), Self::Rectangle(b)) | (Self::Ellipse(a), Self::Ellipse(b)) => {
                a == b
            }
            (
                Self::Arc {
                    bounds: ab,
                    angles: aa,
                },
                Self::Arc {
                    bounds: bb,
                    angles: ba,
                },
            )
            | (
                Self::Pie {
                    bounds: ab,
                    angles: aa,
                },
                Self::Pie {
                    bounds: bb,
                    angles: ba,
                },
            ) => ab == bb && aa == ba,
            (
                Self::RoundedRectangle {
                    bounds: ab,
                    radii: ar,
                },
                Self::RoundedRectangle {
                    bounds: bb,
                    radii: br,
                },
            ) => ab == bb && ar == br,
            (Self::Path(a), Self::Path(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Path> for ShapeRequest<f32> {
    #[inline]
    fn from(path: Path) -> Self {
        Self::Path(Arc::new(path))
    }
}

impl From<Arc<Path>> for ShapeRequest<f32> {
    #[inline]
    fn from(path: Arc<Path>) -> Self {
        Self::Path(path)
    }
}
