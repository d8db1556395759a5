//! Image sources and the concurrent loading pipeline
//!
//! This module contains:
//! - Source handles and decoded images
//! - The decoding seam and its `image`-backed implementation
//! - The order-preserving loader
//! - The capped selection fed into it

/// Decoder trait and default implementation
pub mod decoder;
/// Concurrent, order-preserving loader
pub mod loader;
/// Capped, ordered selection of sources
pub mod selection;
/// Source handles and decoded images
pub mod source;

pub use loader::{load, load_with};
pub use selection::Selection;
pub use source::{DecodedImage, ImageSource, SourceId};
