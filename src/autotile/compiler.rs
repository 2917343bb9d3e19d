//! Compilation of an autotile source sheet into its 256-variant strip
//!
//! Each variant is addressed by its neighbor mask and occupies the 32x32 tile
//! at vertical offset `variant * 32` of the strip.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{debug, info};

use crate::autotile::corner::classify_tile;
use crate::autotile::direction::NeighborMask;
use crate::autotile::variant_table::source_offset;
use crate::io::configuration::{
    QUADRANT_SIZE, SOURCE_SHEET_HEIGHT, SOURCE_SHEET_WIDTH, STRIP_HEIGHT, TILE_SIZE, VARIANT_COUNT,
};
use crate::io::error::{AutotileError, Result, invalid_parameter};
use crate::surface::blit::{Region, Surface};

/// Identifying metadata of an autotile asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutotileInfo {
    /// Human-readable name, unique within a registry
    pub name: String,
    /// Caller-assigned identifier
    pub id: u32,
    /// Where the source sheet was loaded from
    pub source_path: PathBuf,
}

impl AutotileInfo {
    /// Create metadata for an autotile
    pub fn new(name: impl Into<String>, id: u32, source_path: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            id,
            source_path: source_path.as_ref().to_path_buf(),
        }
    }
}

/// An autotile source sheet and its compiled variant strip
pub struct Autotile<S: Surface = RgbaImage> {
    info: AutotileInfo,
    source: S,
    padding: u32,
    strip: Option<S>,
}

impl<S: Surface> Autotile<S> {
    /// Wrap a source surface without compiling it
    pub const fn new(info: AutotileInfo, source: S) -> Self {
        Self {
            info,
            source,
            padding: 0,
            strip: None,
        }
    }

    /// Set the margin around the layout inside the source sheet
    #[must_use]
    pub const fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Asset metadata
    pub const fn info(&self) -> &AutotileInfo {
        &self.info
    }

    /// Autotile name
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Margin around the layout inside the source sheet
    pub const fn padding(&self) -> u32 {
        self.padding
    }

    /// Source sheet
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Whether `compile` has populated the strip
    pub const fn is_compiled(&self) -> bool {
        self.strip.is_some()
    }

    /// Compiled strip, if any
    pub const fn strip(&self) -> Option<&S> {
        self.strip.as_ref()
    }

    /// Minimum source size for the configured padding
    ///
    /// `None` if the padded layout does not fit in `u32` pixels.
    pub const fn required_source_size(&self) -> Option<(u32, u32)> {
        let Some(margin) = self.padding.checked_mul(2) else {
            return None;
        };
        match (
            SOURCE_SHEET_WIDTH.checked_add(margin),
            SOURCE_SHEET_HEIGHT.checked_add(margin),
        ) {
            (Some(width), Some(height)) => Some((width, height)),
            _ => None,
        }
    }

    /// Compile every variant into the strip
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The strip was already compiled
    /// - The source sheet is smaller than the layout requires
    pub fn compile(&mut self) -> Result<()> {
        self.compile_with_progress(|_| {})
    }

    /// Compile every variant, reporting each finished variant to `on_variant`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The strip was already compiled
    /// - The source sheet is smaller than the layout requires
    pub fn compile_with_progress<F>(&mut self, mut on_variant: F) -> Result<()>
    where
        F: FnMut(NeighborMask),
    {
        if self.is_compiled() {
            return Err(AutotileError::AlreadyCompiled {
                name: self.info.name.clone(),
            });
        }
        self.validate_source()?;

        let mut strip = S::blank(TILE_SIZE, STRIP_HEIGHT);
        for mask in NeighborMask::all() {
            let tile_y = mask.variant() as u32 * TILE_SIZE;
            for (corner, shape) in classify_tile(mask) {
                let offset = source_offset(corner, shape).padded(self.padding);
                let (local_x, local_y) = corner.local_origin();
                strip.copy_region(
                    &self.source,
                    Region::square(offset.x, offset.y, QUADRANT_SIZE),
                    local_x,
                    tile_y + local_y,
                )?;
            }
            on_variant(mask);
        }

        info!(
            autotile = %self.info.name,
            variants = VARIANT_COUNT,
            "compiled autotile strip"
        );
        self.strip = Some(strip);
        Ok(())
    }

    fn validate_source(&self) -> Result<()> {
        let actual = self.source.dimensions();
        let required = self.required_source_size().ok_or_else(|| {
            invalid_parameter(
                "padding",
                &self.padding,
                &"padded sheet layout exceeds u32 pixel coordinates",
            )
        })?;
        if actual.0 < required.0 || actual.1 < required.1 {
            return Err(AutotileError::MalformedSource {
                name: self.info.name.clone(),
                actual,
                required,
            });
        }
        Ok(())
    }

    /// Blit one compiled variant onto `dest` with its top-left at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `variant` is not in `0..=255`
    /// - The autotile has not been compiled
    /// - The tile does not fit on the destination at `(x, y)`
    pub fn draw_tile(&self, dest: &mut S, variant: usize, x: u32, y: u32) -> Result<()> {
        let region = variant_region(variant)?;
        let strip = self.strip.as_ref().ok_or_else(|| AutotileError::NotCompiled {
            name: self.info.name.clone(),
        })?;
        debug!(autotile = %self.info.name, variant, x, y, "drawing variant");
        dest.copy_region(strip, region, x, y)
    }
}

/// Strip rectangle holding a variant
///
/// # Errors
///
/// Returns `VariantOutOfRange` if `variant` is not in `0..=255`
pub fn variant_region(variant: usize) -> Result<Region> {
    if variant >= VARIANT_COUNT {
        return Err(AutotileError::VariantOutOfRange { variant });
    }
    Ok(Region::square(0, variant as u32 * TILE_SIZE, TILE_SIZE))
}
