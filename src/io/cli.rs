//! Command-line interface: select images, compose the grid, write the PNG

use crate::compose::compositor::{CompositionResult, Compositor};
use crate::io::configuration::{DEFAULT_CANVAS_SIDE, OUTPUT_FILE_NAME};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{export_png, resolve_output_path};
use crate::io::progress::ProgressManager;
use crate::loading::loader::load;
use crate::loading::selection::Selection;
use crate::loading::source::DecodedImage;
use crate::spatial::layout::CanvasSize;
use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use std::path::PathBuf;
use tracing::info;

/// Resampling filter used to scale images into cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResampleFilter {
    /// Nearest neighbor
    Nearest,
    /// Linear (bilinear)
    Triangle,
    /// Cubic
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => Self::Nearest,
            ResampleFilter::Triangle => Self::Triangle,
            ResampleFilter::CatmullRom => Self::CatmullRom,
            ResampleFilter::Gaussian => Self::Gaussian,
            ResampleFilter::Lanczos3 => Self::Lanczos3,
        }
    }
}

#[derive(Parser)]
#[command(name = "gridcollage")]
#[command(
    author,
    version,
    about = "Compose up to sixteen images into a 4x4 grid and export one PNG"
)]
/// Command-line arguments for the collage tool
pub struct Cli {
    /// Images to place, in grid order (only the first 16 are used)
    #[arg(value_name = "IMAGES")]
    pub images: Vec<PathBuf>,

    /// Output file, or a directory to receive combined-image.png
    #[arg(short, long, default_value = OUTPUT_FILE_NAME)]
    pub output: PathBuf,

    /// Side length of a square canvas in pixels
    #[arg(short, long, conflicts_with_all = ["width", "height"])]
    pub size: Option<u32>,

    /// Canvas width in pixels (implies square if height not specified)
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Resampling filter for scaling images into cells
    #[arg(short, long, value_enum, default_value_t = ResampleFilter::Triangle)]
    pub filter: ResampleFilter,

    /// Drop the image at this position (0-based, repeatable)
    #[arg(long = "skip", value_name = "INDEX")]
    pub skip: Vec<usize>,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the canvas size from `--size`, `--width` and `--height`
    ///
    /// # Errors
    ///
    /// Returns an error if a requested dimension is zero
    pub fn canvas_size(&self) -> Result<CanvasSize> {
        let size = match (self.size, self.width, self.height) {
            (Some(side), _, _) => CanvasSize::square(side),
            (None, Some(w), Some(h)) => CanvasSize::new(w, h),
            (None, Some(side), None) | (None, None, Some(side)) => CanvasSize::square(side),
            (None, None, None) => CanvasSize::square(DEFAULT_CANVAS_SIDE),
        };

        if size.width == 0 || size.height == 0 {
            return Err(invalid_parameter(
                "size",
                &format!("{}x{}", size.width, size.height),
                &"canvas dimensions must be positive",
            ));
        }
        Ok(size)
    }
}

/// Runs one composition pass for the command-line arguments
pub struct CollageProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CollageProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load, compose and export; returns the path written
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, any image fails to load,
    /// the canvas is unavailable, or the output cannot be written
    pub fn process(&mut self) -> Result<PathBuf> {
        let size = self.cli.canvas_size()?;
        let selection = self.selection()?;

        if selection.remaining() > 0 {
            info!(
                "You need to upload {} more image(s).",
                selection.remaining()
            );
        }

        let images = futures::executor::block_on(load(selection.sources()))?;
        let result = self.compose(size, images)?;

        let output_path = resolve_output_path(&self.cli.output);
        export_png(&result, &output_path)?;
        info!(
            path = %output_path.display(),
            bytes = result.bytes().len(),
            "wrote composition"
        );

        Ok(output_path)
    }

    fn selection(&self) -> Result<Selection> {
        let mut selection = Selection::from_paths(&self.cli.images)?;

        let mut skips = self.cli.skip.clone();
        skips.sort_unstable();
        skips.dedup();

        // Remove from the back so earlier indices stay valid
        for &index in skips.iter().rev() {
            if selection.remove(index).is_none() {
                return Err(invalid_parameter(
                    "skip",
                    &index,
                    &format!("selection only has {} image(s)", selection.len()),
                ));
            }
        }
        Ok(selection)
    }

    fn compose(&mut self, size: CanvasSize, images: Vec<DecodedImage>) -> Result<CompositionResult> {
        let compositor = Compositor::new(size).with_filter(self.cli.filter.into());
        match self.progress_manager {
            Some(ref mut pm) => compositor.compose_observed(images, pm),
            None => compositor.compose(images),
        }
    }
}
