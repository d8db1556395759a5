//! Four-by-four image grid composition
//!
//! Up to sixteen encoded images are decoded concurrently, fitted into equal
//! cells of a fixed-size canvas with their aspect ratio preserved, and the
//! canvas is encoded as a single PNG.

#![forbid(unsafe_code)]

/// Grid drawing onto surfaces and PNG encoding
pub mod compose;
/// Command-line interface, configuration, errors and export
pub mod io;
/// Image sources, decoding and the concurrent loader
pub mod loading;
/// Grid geometry and fit scaling
pub mod spatial;

pub use compose::{CompositionResult, Compositor};
pub use io::error::{CollageError, Result};
pub use loading::{DecodedImage, ImageSource, Selection, load};
pub use spatial::CanvasSize;
