//! Single-pass grid composition and PNG encoding

use image::imageops::FilterType;
use tracing::{debug, trace};

use crate::compose::canvas::RasterCanvas;
use crate::compose::surface::Surface;
use crate::io::configuration::DEFAULT_FILTER;
use crate::io::error::Result;
use crate::loading::source::DecodedImage;
use crate::spatial::layout::{CanvasSize, GridCursor, Placement};

/// Receives progress notifications while a grid is drawn
pub trait DrawObserver {
    /// Called once before the first image is drawn
    fn on_pass_start(&mut self, _total: usize) {}

    /// Called after each image has been drawn
    fn on_placement(&mut self, _placement: &Placement) {}

    /// Called once after the last image has been drawn
    fn on_pass_end(&mut self) {}
}

impl DrawObserver for () {}

/// Encoded output of one composition pass
#[derive(Debug, Clone)]
pub struct CompositionResult {
    bytes: Vec<u8>,
    size: CanvasSize,
    placements: Vec<Placement>,
}

impl CompositionResult {
    /// Encoded PNG bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Canvas size the result was drawn at
    pub const fn size(&self) -> CanvasSize {
        self.size
    }

    /// Where each input image was drawn, in input order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

/// Draw `images` onto `surface` in reading order
///
/// No count check happens here: images past the sixteenth continue below the
/// fourth row. Callers cap the input beforehand.
///
/// # Errors
///
/// Propagates the first drawing error from the surface
pub fn draw_grid<S, O>(
    surface: &mut S,
    images: &[DecodedImage],
    observer: &mut O,
) -> Result<Vec<Placement>>
where
    S: Surface + ?Sized,
    O: DrawObserver + ?Sized,
{
    let mut cursor = GridCursor::new(surface.size());
    let mut placements = Vec::with_capacity(images.len());
    observer.on_pass_start(images.len());

    for (index, image) in images.iter().enumerate() {
        let placement = cursor.place(index, image.width(), image.height());
        trace!(
            source = %image.id(),
            row = placement.row,
            column = placement.column,
            scale = placement.scale,
            "placing image"
        );
        surface.draw_image(image, placement.dest)?;
        observer.on_placement(&placement);
        placements.push(placement);
        cursor.advance();
    }

    observer.on_pass_end();
    Ok(placements)
}

/// Draw `images` onto a caller-supplied surface and encode it
///
/// # Errors
///
/// Returns an error if drawing or encoding fails
pub fn compose_onto<S, O>(
    surface: &mut S,
    images: Vec<DecodedImage>,
    observer: &mut O,
) -> Result<CompositionResult>
where
    S: Surface + ?Sized,
    O: DrawObserver + ?Sized,
{
    let placements = draw_grid(surface, &images, observer)?;
    let bytes = surface.encode_png()?;
    drop(images);

    let size = surface.size();
    debug!(
        images = placements.len(),
        width = size.width,
        height = size.height,
        bytes = bytes.len(),
        "composition finished"
    );
    Ok(CompositionResult {
        bytes,
        size,
        placements,
    })
}

/// Composes decoded images into a fixed 4x4 grid on a raster canvas
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    size: CanvasSize,
    filter: FilterType,
}

impl Compositor {
    /// Create a compositor for a canvas of `size`
    pub const fn new(size: CanvasSize) -> Self {
        Self {
            size,
            filter: DEFAULT_FILTER,
        }
    }

    /// Use `filter` when scaling images into cells
    #[must_use]
    pub const fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Output canvas size
    pub const fn size(&self) -> CanvasSize {
        self.size
    }

    /// Run one composition pass
    ///
    /// # Errors
    ///
    /// Returns [`crate::CollageError::SurfaceUnavailable`] if the canvas cannot
    /// be acquired, or an error from drawing or encoding
    pub fn compose(&self, images: Vec<DecodedImage>) -> Result<CompositionResult> {
        self.compose_observed(images, &mut ())
    }

    /// Run one composition pass, reporting progress to `observer`
    ///
    /// # Errors
    ///
    /// Returns [`crate::CollageError::SurfaceUnavailable`] if the canvas cannot
    /// be acquired, or an error from drawing or encoding
    pub fn compose_observed<O>(
        &self,
        images: Vec<DecodedImage>,
        observer: &mut O,
    ) -> Result<CompositionResult>
    where
        O: DrawObserver + ?Sized,
    {
        let mut canvas = RasterCanvas::with_filter(self.size, self.filter)?;
        compose_onto(&mut canvas, images, observer)
    }
}
