//! Per-sheet variant progress, collapsing into a batch bar for large runs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, VARIANT_COUNT};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static VARIANT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:32.green/white}] {pos:>3}/{len} variants {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SHEETS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sheets: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress display for compiling a batch of sheets
///
/// Each sheet advances a 256-step variant bar. Batches larger than
/// [`MAX_INDIVIDUAL_PROGRESS_BARS`] recycle a fixed set of variant bars and
/// show an extra bar counting finished sheets.
pub struct ProgressManager {
    display: MultiProgress,
    sheets_bar: Option<ProgressBar>,
    variant_bars: Vec<ProgressBar>,
    sheet_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars yet
    pub fn new() -> Self {
        Self {
            display: MultiProgress::new(),
            sheets_bar: None,
            variant_bars: Vec::new(),
            sheet_count: 0,
        }
    }

    /// Create the bars for a batch of `sheet_count` sheets
    pub fn initialize(&mut self, sheet_count: usize) {
        self.sheet_count = sheet_count;

        self.sheets_bar = (sheet_count > MAX_INDIVIDUAL_PROGRESS_BARS).then(|| {
            let bar = ProgressBar::new(sheet_count as u64).with_style(SHEETS_STYLE.clone());
            self.display.add(bar)
        });

        self.variant_bars = (0..sheet_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                let bar =
                    ProgressBar::new(VARIANT_COUNT as u64).with_style(VARIANT_STYLE.clone());
                self.display.add(bar)
            })
            .collect();
    }

    /// Number of sheets in the batch
    pub const fn file_count(&self) -> usize {
        self.sheet_count
    }

    /// Whether the sheet-counting bar is shown
    pub const fn is_batched(&self) -> bool {
        self.sheets_bar.is_some()
    }

    fn variant_bar(&self, index: usize) -> Option<&ProgressBar> {
        let len = self.variant_bars.len();
        if len == 0 {
            return None;
        }
        self.variant_bars.get(index % len)
    }

    /// Point the sheet's variant bar at a new file
    pub fn start_file(&self, index: usize, path: &Path) {
        if let Some(bar) = self.variant_bar(index) {
            bar.reset();
            bar.set_prefix(path.file_name().unwrap_or_default().to_string_lossy().to_string());
            bar.set_message("");
        }
    }

    /// Count one more compiled variant
    pub fn advance_variant(&self, index: usize) {
        if let Some(bar) = self.variant_bar(index) {
            bar.inc(1);
        }
    }

    /// Mark a sheet as written
    pub fn complete_file(&self, index: usize) {
        if let Some(bar) = self.variant_bar(index) {
            bar.set_message("done");
        }
        if let Some(sheets) = &self.sheets_bar {
            sheets.inc(1);
        }
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(sheets) = &self.sheets_bar {
            sheets.finish_with_message("all sheets compiled");
        }
        let _ = self.display.clear();
    }
}
