//! Decoding seam between raw sources and drawable images

use std::io::Cursor;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use image::{DynamicImage, ImageDecoder as _, ImageError, ImageReader};
use tracing::debug;

use crate::io::error::{CollageError, Result};
use crate::loading::source::{DecodedImage, ImageSource};

/// Turns an [`ImageSource`] into a [`DecodedImage`]
///
/// Each call returns its own future, so a loader can join many decodes on a
/// single thread. The default decoder does all of its work on the first poll,
/// so on one thread the decodes themselves still run back to back.
pub trait Decoder {
    /// Decode one source
    fn decode<'a>(&'a self, source: &'a ImageSource) -> LocalBoxFuture<'a, Result<DecodedImage>>;
}

/// Decoder backed by the `image` crate, guessing the format from magic bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl Decoder for ImageDecoder {
    fn decode<'a>(&'a self, source: &'a ImageSource) -> LocalBoxFuture<'a, Result<DecodedImage>> {
        async move { decode_bytes(source) }.boxed_local()
    }
}

/// Synchronously decode a single source
///
/// EXIF orientation is applied, so the result has the displayed dimensions
/// rather than the stored ones.
///
/// # Errors
///
/// Returns [`CollageError::Decode`] if the bytes are not a supported image,
/// or [`CollageError::EmptyImage`] if the image has a zero dimension
pub fn decode_bytes(source: &ImageSource) -> Result<DecodedImage> {
    let decode_error = |error: ImageError| CollageError::Decode {
        source_id: source.id().clone(),
        source: error,
    };

    let mut decoder = ImageReader::new(Cursor::new(source.bytes()))
        .with_guessed_format()
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .into_decoder()
        .map_err(decode_error)?;
    let orientation = decoder.orientation().map_err(decode_error)?;
    let mut image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
    image.apply_orientation(orientation);

    debug!(
        source = %source.id(),
        width = image.width(),
        height = image.height(),
        ?orientation,
        "decoded image"
    );
    DecodedImage::new(source.id().clone(), image)
}
