//! Grid composition onto drawing surfaces

/// Software raster canvas
pub mod canvas;
/// Grid drawing pass and encoded result
pub mod compositor;
/// Surface trait and pixel snapping
pub mod surface;

pub use canvas::RasterCanvas;
pub use compositor::{CompositionResult, Compositor, DrawObserver, compose_onto, draw_grid};
pub use surface::Surface;
