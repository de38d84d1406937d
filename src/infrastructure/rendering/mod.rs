//! Chart painting: pure geometry plus a Canvas 2D backend.

pub mod canvas_renderer;
pub mod geometry;

pub use canvas_renderer::*;
pub use geometry::*;
