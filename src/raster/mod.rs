// MIT/Apache2 License

//! Software implementations of the drawing collaborators.

mod clip;
mod direct;
mod flatten;
mod line;
mod paint;
mod plot;
mod render;

pub use direct::SoftwareDirectDrawer;
pub use render::SoftwareRenderer;
