//! PNG loading of autotile sheets and export of compiled strips

use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::autotile::compiler::{Autotile, AutotileInfo};
use crate::io::configuration::{PREVIEW_COLUMNS, TILE_SIZE, VARIANT_COUNT};
use crate::io::error::{AutotileError, Result};
use crate::surface::blit::Surface;

/// Load an autotile source sheet from an image file
///
/// The autotile is named after the file stem and left uncompiled.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_autotile(path: &Path, id: u32, padding: u32) -> Result<Autotile<RgbaImage>> {
    let source = image::open(path)
        .map_err(|e| AutotileError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();

    let name = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    info!(
        autotile = %name,
        width = source.width(),
        height = source.height(),
        "loaded autotile source"
    );

    Ok(Autotile::new(AutotileInfo::new(name, id, path), source).with_padding(padding))
}

/// Write the compiled 32x8192 strip of an autotile
///
/// # Errors
///
/// Returns an error if:
/// - The autotile has not been compiled
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_strip(autotile: &Autotile<RgbaImage>, output_path: &Path) -> Result<()> {
    let strip = autotile.strip().ok_or_else(|| AutotileError::NotCompiled {
        name: autotile.name().to_string(),
    })?;
    save_png(strip, output_path)
}

/// Write a 16x16 grid of every variant, in mask order, for visual inspection
///
/// # Errors
///
/// Returns an error if:
/// - The autotile has not been compiled
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview(autotile: &Autotile<RgbaImage>, output_path: &Path) -> Result<()> {
    let preview = render_preview(autotile)?;
    save_png(&preview, output_path)
}

/// Compose every variant into a square preview sheet
///
/// # Errors
///
/// Returns `NotCompiled` if the autotile has not been compiled
pub fn render_preview(autotile: &Autotile<RgbaImage>) -> Result<RgbaImage> {
    let rows = (VARIANT_COUNT as u32).div_ceil(PREVIEW_COLUMNS);
    let mut preview = RgbaImage::blank(PREVIEW_COLUMNS * TILE_SIZE, rows * TILE_SIZE);

    for variant in 0..VARIANT_COUNT {
        let column = variant as u32 % PREVIEW_COLUMNS;
        let row = variant as u32 / PREVIEW_COLUMNS;
        autotile.draw_tile(&mut preview, variant, column * TILE_SIZE, row * TILE_SIZE)?;
    }

    Ok(preview)
}

fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AutotileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| AutotileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
