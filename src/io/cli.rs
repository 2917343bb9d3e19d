//! Command-line interface for batch compiling autotile sheets

use crate::io::configuration::{DEFAULT_PADDING, MAX_PADDING, PREVIEW_SUFFIX, STRIP_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_preview, export_strip, load_autotile};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "autostrip")]
#[command(
    author,
    version,
    about = "Compile autotile sheets into 256-variant tile strips"
)]
/// Command-line arguments for the autotile compiler
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Margin in pixels around the layout inside each source sheet
    #[arg(short, long, default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// Also write a 16x16 preview sheet of every variant
    #[arg(short = 'P', long)]
    pub preview: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Compile files even if the strip already exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log every drawing and encoding step
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate option values that clap cannot bound
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the padding exceeds the supported maximum
    pub fn validate(&self) -> Result<()> {
        if self.padding > MAX_PADDING {
            return Err(invalid_parameter(
                "padding",
                &self.padding,
                &format!("must be at most {MAX_PADDING}"),
            ));
        }
        Ok(())
    }
}

/// Orchestrates batch compilation of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the paths of the strips written.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading, compilation or export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        self.cli.validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!(target = %self.cli.target.display(), "nothing to compile");
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut written = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            written.push(self.process_file(file, index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        let candidates = if target.is_dir() {
            let mut entries = std::fs::read_dir(target)?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<Vec<_>>>()?;
            entries.retain(|path| Self::is_source_png(path));
            entries.sort();
            entries
        } else if target.is_file() && Self::is_source_png(target) {
            vec![target.clone()]
        } else {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG autotile sheet or a directory",
            ));
        };

        Ok(candidates
            .into_iter()
            .filter(|path| self.should_process_file(path))
            .collect())
    }

    /// Whether a path is a PNG that is not itself a generated output
    pub fn is_source_png(path: &Path) -> bool {
        let is_png = path.extension().and_then(|s| s.to_str()) == Some("png");
        let stem = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        is_png && !stem.ends_with(STRIP_SUFFIX) && !stem.ends_with(PREVIEW_SUFFIX)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        let existing = self.cli.skip_existing() && Self::get_output_path(input_path).exists();
        if existing {
            warn!(input = %input_path.display(), "skipping, strip already exists");
        }
        !existing
    }

    fn process_file(&self, input_path: &Path, index: usize) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let id = u32::try_from(index).map_err(|_overflow| {
            invalid_parameter("file count", &index, &"too many files in one batch")
        })?;
        let mut autotile = load_autotile(input_path, id, self.cli.padding)?;
        autotile.compile_with_progress(|_| {
            if let Some(ref pm) = self.progress_manager {
                pm.advance_variant(index);
            }
        })?;

        export_strip(&autotile, &output_path)?;

        if self.cli.preview {
            export_preview(&autotile, &Self::get_preview_path(input_path))?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index);
        }

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "wrote strip"
        );
        Ok(output_path)
    }

    /// Path of the strip written for an input sheet
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, STRIP_SUFFIX)
    }

    /// Path of the preview sheet written for an input sheet
    pub fn get_preview_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, PREVIEW_SUFFIX)
    }

    fn sibling_with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
