//! Fixed 4x4 grid geometry with aspect-preserving fit
//!
//! Cells are `W / 4` by `H / 4` no matter how many images are placed. A
//! cursor walks the cells left-to-right, top-to-bottom; each image is scaled
//! by `min(cell_w / w, cell_h / h)` and centered in its cell.

use crate::io::configuration::{GRID_COLUMNS, GRID_ROWS};

/// Pixel dimensions of the output canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CanvasSize {
    /// Create a canvas size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a square canvas size
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Size of one grid cell on this canvas
    pub fn cell_size(self) -> CellSize {
        CellSize {
            width: f64::from(self.width) / GRID_COLUMNS as f64,
            height: f64::from(self.height) / GRID_ROWS as f64,
        }
    }
}

/// Size of a single grid cell, possibly fractional
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    /// Cell width in pixels
    pub width: f64,
    /// Cell height in pixels
    pub height: f64,
}

/// Axis-aligned rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Right edge
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width divided by height
    pub const fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Scale an image to fit inside a cell, centered, relative to the cell origin
///
/// Returns the uniform scale factor and the destination rectangle.
pub fn fit_in_cell(cell: CellSize, image_width: u32, image_height: u32) -> (f64, Rect) {
    let width = f64::from(image_width);
    let height = f64::from(image_height);

    let scale = (cell.width / width).min(cell.height / height);
    let scaled_width = width * scale;
    let scaled_height = height * scale;

    let rect = Rect {
        x: (cell.width - scaled_width) / 2.0,
        y: (cell.height - scaled_height) / 2.0,
        width: scaled_width,
        height: scaled_height,
    };
    (scale, rect)
}

/// Where one image lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position of the image in the input order
    pub index: usize,
    /// Grid row, counted from the top
    pub row: usize,
    /// Grid column, counted from the left
    pub column: usize,
    /// Uniform scale applied to the image
    pub scale: f64,
    /// Destination rectangle on the canvas
    pub dest: Rect,
}

/// Walks grid cells in reading order
#[derive(Debug, Clone)]
pub struct GridCursor {
    x: f64,
    y: f64,
    row: usize,
    column: usize,
    cell: CellSize,
    canvas_width: f64,
}

impl GridCursor {
    /// Start at the top-left cell of the canvas
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            row: 0,
            column: 0,
            cell: canvas.cell_size(),
            canvas_width: f64::from(canvas.width),
        }
    }

    /// Origin of the current cell
    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Current (row, column)
    pub const fn cell_index(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Compute the placement of an image in the current cell
    pub fn place(&self, index: usize, image_width: u32, image_height: u32) -> Placement {
        let (scale, local) = fit_in_cell(self.cell, image_width, image_height);
        Placement {
            index,
            row: self.row,
            column: self.column,
            scale,
            dest: Rect {
                x: self.x + local.x,
                y: self.y + local.y,
                ..local
            },
        }
    }

    /// Move to the next cell, wrapping to a new row at the canvas edge
    pub const fn advance(&mut self) {
        self.x += self.cell.width;
        self.column += 1;
        if self.x >= self.canvas_width {
            self.x = 0.0;
            self.column = 0;
            self.y += self.cell.height;
            self.row += 1;
        }
    }
}

/// Lay out images of the given dimensions in input order
pub fn layout<I>(canvas: CanvasSize, dimensions: I) -> Vec<Placement>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut cursor = GridCursor::new(canvas);
    dimensions
        .into_iter()
        .enumerate()
        .map(|(index, (width, height))| {
            let placement = cursor.place(index, width, height);
            cursor.advance();
            placement
        })
        .collect()
}
