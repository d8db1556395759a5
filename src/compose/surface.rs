//! Drawing surface abstraction and pixel snapping

use crate::io::error::Result;
use crate::loading::source::DecodedImage;
use crate::spatial::layout::{CanvasSize, Rect};

/// A fixed-size surface the compositor draws onto
///
/// Passed explicitly to the compositor so a pass can run against a raster
/// canvas or any recording stand-in.
pub trait Surface {
    /// Dimensions of the surface
    fn size(&self) -> CanvasSize;

    /// Draw the whole of `image` scaled into `dest`
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be drawn
    fn draw_image(&mut self, image: &DecodedImage, dest: Rect) -> Result<()>;

    /// Encode the current contents as PNG
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails
    fn encode_png(&self) -> Result<Vec<u8>>;
}

/// Destination rectangle snapped to whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Width, at least one pixel
    pub width: u32,
    /// Height, at least one pixel
    pub height: u32,
}

impl PixelRect {
    /// Round a rectangle to the nearest pixels
    ///
    /// Returns `None` if any component is not finite or the size is negative.
    pub fn from_rect(rect: Rect) -> Option<Self> {
        let components = [rect.x, rect.y, rect.width, rect.height];
        if components.iter().any(|v| !v.is_finite()) || rect.width < 0.0 || rect.height < 0.0 {
            return None;
        }
        Some(Self {
            x: rect.x.round() as i64,
            y: rect.y.round() as i64,
            width: (rect.width.round() as u32).max(1),
            height: (rect.height.round() as u32).max(1),
        })
    }

    /// Whether any part of this rectangle lies on a canvas of `size`
    pub const fn intersects(&self, size: CanvasSize) -> bool {
        let right = self.x + self.width as i64;
        let bottom = self.y + self.height as i64;
        right > 0 && bottom > 0 && self.x < size.width as i64 && self.y < size.height as i64
    }
}
