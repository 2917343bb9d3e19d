//! Layout constants and runtime configuration defaults

// Tile geometry
/// Edge length of a compiled variant tile in pixels
pub const TILE_SIZE: u32 = 32;
/// Edge length of one corner quadrant in pixels
pub const QUADRANT_SIZE: u32 = 16;

/// Number of neighbor-mask variants compiled per autotile
pub const VARIANT_COUNT: usize = 256;
/// Height of the compiled strip (all variants stacked vertically)
pub const STRIP_HEIGHT: u32 = TILE_SIZE * VARIANT_COUNT as u32;

// Source sheet layout: an inner-corner block at the top right and a 3x3 blob below
/// Minimum width of an autotile source sheet without padding
pub const SOURCE_SHEET_WIDTH: u32 = 96;
/// Minimum height of an autotile source sheet without padding
pub const SOURCE_SHEET_HEIGHT: u32 = 128;

/// Padding applied when none is given
pub const DEFAULT_PADDING: u32 = 0;
/// Largest padding accepted from the command line
pub const MAX_PADDING: u32 = 64;

/// Variants per row in the preview sheet
pub const PREVIEW_COLUMNS: u32 = 16;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to compiled strip filenames
pub const STRIP_SUFFIX: &str = "_strip";
/// Suffix added to preview sheet filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
