//! Ordered, capped set of sources awaiting composition

use std::path::Path;

use tracing::warn;

use crate::io::configuration::MAX_IMAGES;
use crate::io::error::Result;
use crate::loading::source::ImageSource;

/// Ordered selection of at most [`MAX_IMAGES`] sources
///
/// Anything past the cap is dropped, keeping the first entries. Source
/// indices always match positions in the selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    sources: Vec<ImageSource>,
}

impl Selection {
    /// Create an empty selection
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Build a selection from sources, keeping only the first [`MAX_IMAGES`]
    pub fn from_sources(sources: impl IntoIterator<Item = ImageSource>) -> Self {
        let mut sources: Vec<ImageSource> = sources.into_iter().collect();
        if sources.len() > MAX_IMAGES {
            warn!(
                dropped = sources.len() - MAX_IMAGES,
                "selection capped at {} images",
                MAX_IMAGES
            );
            sources.truncate(MAX_IMAGES);
        }
        for (index, source) in sources.iter_mut().enumerate() {
            source.set_index(index);
        }
        Self { sources }
    }

    /// Read image files into a selection
    ///
    /// Paths past the cap are never read.
    ///
    /// # Errors
    ///
    /// Returns an error if any kept file cannot be read
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        if paths.len() > MAX_IMAGES {
            warn!(
                dropped = paths.len() - MAX_IMAGES,
                "selection capped at {} images",
                MAX_IMAGES
            );
        }
        let sources = paths
            .iter()
            .take(MAX_IMAGES)
            .enumerate()
            .map(|(index, path)| ImageSource::from_path(index, path.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sources })
    }

    /// Remove the source at `index`, shifting later sources down
    pub fn remove(&mut self, index: usize) -> Option<ImageSource> {
        if index >= self.sources.len() {
            return None;
        }
        let removed = self.sources.remove(index);
        for (position, source) in self.sources.iter_mut().enumerate().skip(index) {
            source.set_index(position);
        }
        Some(removed)
    }

    /// Number of selected sources
    pub const fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether nothing is selected
    pub const fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// How many more sources fit before the grid is full
    pub const fn remaining(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.sources.len())
    }

    /// Selected sources in order
    pub fn sources(&self) -> &[ImageSource] {
        &self.sources
    }

    /// Consume the selection, yielding its sources
    pub fn into_sources(self) -> Vec<ImageSource> {
        self.sources
    }
}
