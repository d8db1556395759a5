//! Progress display for the cells drawn during a pass

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

use crate::compose::compositor::DrawObserver;
use crate::spatial::layout::Placement;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced once per drawn cell
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden());
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Cells drawn so far in the current pass
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total cells expected in the current pass
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Whether the current pass has finished
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl DrawObserver for ProgressManager {
    fn on_pass_start(&mut self, total: usize) {
        self.bar.reset();
        self.bar.set_length(total as u64);
        self.bar.set_message("Composing");
    }

    fn on_placement(&mut self, placement: &Placement) {
        self.bar
            .set_prefix(format!("row {} col {}", placement.row, placement.column));
        self.bar.inc(1);
    }

    fn on_pass_end(&mut self) {
        self.bar.finish_and_clear();
    }
}
