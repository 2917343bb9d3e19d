//! Tests for layout constants

#[cfg(test)]
mod tests {
    use autostrip::io::configuration::{
        MAX_INDIVIDUAL_PROGRESS_BARS, MAX_PADDING, PREVIEW_COLUMNS, QUADRANT_SIZE,
        SOURCE_SHEET_HEIGHT, SOURCE_SHEET_WIDTH, STRIP_HEIGHT, TILE_SIZE, VARIANT_COUNT,
    };

    // Tests the strip holds exactly one tile per variant
    // Verified by changing the strip height
    #[test]
    fn test_strip_geometry() {
        assert_eq!(STRIP_HEIGHT, 8192);
        assert_eq!(STRIP_HEIGHT / TILE_SIZE, VARIANT_COUNT as u32);
        assert_eq!(QUADRANT_SIZE * 2, TILE_SIZE);
    }

    // Tests the source layout is a whole number of quadrant cells
    // Verified by setting an odd sheet width
    #[test]
    fn test_source_layout_is_quadrant_aligned() {
        assert_eq!(SOURCE_SHEET_WIDTH % QUADRANT_SIZE, 0);
        assert_eq!(SOURCE_SHEET_HEIGHT % QUADRANT_SIZE, 0);
        assert_eq!(SOURCE_SHEET_WIDTH / TILE_SIZE, 3);
        assert_eq!(SOURCE_SHEET_HEIGHT / TILE_SIZE, 4);
    }

    // Tests the preview grid is square and batching has a threshold
    // Verified by setting zero preview columns
    #[test]
    fn test_display_settings() {
        assert_eq!(PREVIEW_COLUMNS * PREVIEW_COLUMNS, VARIANT_COUNT as u32);
        assert!(MAX_INDIVIDUAL_PROGRESS_BARS > 0);
        assert!(MAX_PADDING >= QUADRANT_SIZE);
    }
}
