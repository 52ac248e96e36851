// MIT/Apache2 License

//! Shape drawing on top of raster surfaces.
//!
//! Every shape request, whether it is a line, a polygon, an arc or a prebuilt path, flows through the same
//! [`Dispatcher`]. Thin, opaque strokes go straight to a [`DirectDrawer`]; everything else is lowered into a
//! path and handed to a [`PathRenderer`]. Each operation can be invoked in five ways: blocking, with a
//! cancellable configuration, with a caller supplied [`ExecutionContext`], in the background with a
//! [`DrawHandle`], or as a future.

#![forbid(unsafe_code)]

mod error;

pub mod classify;
pub mod color;
pub mod context;
pub mod dispatch;
pub mod drawer;
pub mod execute;
pub mod geometry;
pub mod gradient;
pub mod intensity;
pub mod options;
pub mod path;
pub mod pen;
pub mod quantize;
pub mod raster;
pub mod shape;
pub mod surface;
pub mod validate;

pub(crate) mod util;

pub use color::*;
pub use context::*;
pub use dispatch::*;
pub use drawer::*;
pub use error::*;
pub use execute::{Begin, Blocking, Convention, DrawHandle, Job, Parallel, WithContext};
#[cfg(feature = "async")]
pub use execute::{DrawFuture, Spawn};
pub use geometry::{ArcAngles, Coord, CornerRadii, Point, Rect, Size};
pub use gradient::*;
pub use intensity::*;
pub use options::*;
pub use pen::*;
pub use quantize::{BitDepthQuantizer, Ditherer, OrderedDitherer, Quantizer};
pub use raster::*;
pub use shape::*;
pub use surface::*;

pub use euclid;
pub use lyon_path::Path;
