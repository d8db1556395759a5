//! Grid geometry
//!
//! Cell sizing, aspect-preserving fit and reading-order placement.

/// Cell sizing, fit scaling and placement
pub mod layout;

pub use layout::{CanvasSize, GridCursor, Placement, Rect};
