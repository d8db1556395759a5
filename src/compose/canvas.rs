//! Software raster canvas backed by an RGBA pixel buffer

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use tracing::trace;

use crate::compose::surface::{PixelRect, Surface};
use crate::io::configuration::{DEFAULT_FILTER, MAX_CANVAS_DIMENSION};
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::loading::source::DecodedImage;
use crate::spatial::layout::{CanvasSize, Rect};

/// In-memory RGBA canvas, transparent until drawn on
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    pixels: RgbaImage,
    filter: FilterType,
}

impl RasterCanvas {
    /// Acquire a canvas with the default resampling filter
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::SurfaceUnavailable`] if the size is zero, exceeds
    /// [`MAX_CANVAS_DIMENSION`], or the pixel buffer would overflow
    pub fn new(size: CanvasSize) -> Result<Self> {
        Self::with_filter(size, DEFAULT_FILTER)
    }

    /// Acquire a canvas that scales images with `filter`
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::SurfaceUnavailable`] if the size is zero, exceeds
    /// [`MAX_CANVAS_DIMENSION`], or the pixel buffer would overflow
    pub fn with_filter(size: CanvasSize, filter: FilterType) -> Result<Self> {
        let unavailable = |reason: &str| CollageError::SurfaceUnavailable {
            width: size.width,
            height: size.height,
            reason: reason.to_string(),
        };

        if size.width == 0 || size.height == 0 {
            return Err(unavailable("canvas has a zero dimension"));
        }
        if size.width > MAX_CANVAS_DIMENSION || size.height > MAX_CANVAS_DIMENSION {
            return Err(unavailable(&format!(
                "canvas exceeds the {MAX_CANVAS_DIMENSION} pixel limit"
            )));
        }
        (size.width as usize)
            .checked_mul(size.height as usize)
            .and_then(|count| count.checked_mul(4))
            .ok_or_else(|| unavailable("pixel buffer size overflows"))?;

        Ok(Self {
            pixels: RgbaImage::new(size.width, size.height),
            filter,
        })
    }

    /// Current pixel contents
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume the canvas, yielding its pixels
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

impl Surface for RasterCanvas {
    fn size(&self) -> CanvasSize {
        CanvasSize::new(self.pixels.width(), self.pixels.height())
    }

    fn draw_image(&mut self, image: &DecodedImage, dest: Rect) -> Result<()> {
        let rect = PixelRect::from_rect(dest).ok_or_else(|| {
            invalid_parameter("dest", &format!("{dest:?}"), &"rectangle is not drawable")
        })?;

        // Overflow cells past the last row land here
        if !rect.intersects(self.size()) {
            trace!(source = %image.id(), ?rect, "placement outside canvas, skipped");
            return Ok(());
        }

        if rect.width == image.width() && rect.height == image.height() {
            imageops::overlay(&mut self.pixels, image.pixels(), rect.x, rect.y);
        } else {
            let scaled = imageops::resize(image.pixels(), rect.width, rect.height, self.filter);
            imageops::overlay(&mut self.pixels, &scaled, rect.x, rect.y);
        }
        Ok(())
    }

    fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|source| CollageError::Encode { source })?;
        Ok(bytes)
    }
}
