//! Layout constants and runtime configuration defaults

use image::imageops::FilterType;

/// Number of columns in the grid
pub const GRID_COLUMNS: usize = 4;
/// Number of rows in the grid
pub const GRID_ROWS: usize = 4;

// Selections beyond this are truncated, never rejected
/// Maximum number of images in one selection
pub const MAX_IMAGES: usize = GRID_COLUMNS * GRID_ROWS;

/// Default side length of the square output canvas
pub const DEFAULT_CANVAS_SIDE: u32 = 4800;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Suggested file name for the exported composition
pub const OUTPUT_FILE_NAME: &str = "combined-image.png";

/// Resampling filter used when scaling images into their cells
pub const DEFAULT_FILTER: FilterType = FilterType::Triangle;
