//! Raw image sources and their decoded counterparts

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, RgbaImage};

use crate::io::error::{CollageError, Result, WithPath};

/// Identity of a source within a selection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceId {
    /// Position of the source in the input order
    pub index: usize,
    /// Human-readable name, usually the file name
    pub name: String,
}

impl SourceId {
    /// Create a source identity
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.index, self.name)
    }
}

/// Handle to raw encoded image bytes
///
/// Cloning shares the underlying buffer.
#[derive(Debug, Clone)]
pub struct ImageSource {
    id: SourceId,
    bytes: Arc<[u8]>,
}

impl ImageSource {
    /// Wrap encoded bytes under the given index and name
    pub fn new(index: usize, name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id: SourceId::new(index, name),
            bytes: bytes.into(),
        }
    }

    /// Read a source from disk, naming it after the file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read
    pub fn from_path(index: usize, path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_path(path, "read image source")?;
        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();
        Ok(Self::new(index, name, bytes))
    }

    /// Identity of this source
    pub const fn id(&self) -> &SourceId {
        &self.id
    }

    /// Encoded bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) const fn set_index(&mut self, index: usize) {
        self.id.index = index;
    }
}

/// Decoded image ready for drawing
#[derive(Debug, Clone)]
pub struct DecodedImage {
    id: SourceId,
    pixels: RgbaImage,
}

impl DecodedImage {
    /// Convert a decoded image to RGBA and attach its source identity
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::EmptyImage`] if either dimension is zero
    pub fn new(id: SourceId, image: DynamicImage) -> Result<Self> {
        let pixels = image.into_rgba8();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(CollageError::EmptyImage { source_id: id });
        }
        Ok(Self { id, pixels })
    }

    /// Identity of the source this image was decoded from
    pub const fn id(&self) -> &SourceId {
        &self.id
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Drawable RGBA pixel buffer
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
