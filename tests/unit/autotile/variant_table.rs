//! Tests for the fixed source quadrant table

#[cfg(test)]
mod tests {
    use autostrip::autotile::corner::{Corner, CornerShape};
    use autostrip::autotile::variant_table::{SourceOffset, source_offset};
    use autostrip::io::configuration::{QUADRANT_SIZE, SOURCE_SHEET_HEIGHT, SOURCE_SHEET_WIDTH};
    use std::collections::HashSet;

    fn all_offsets() -> Vec<(Corner, CornerShape, SourceOffset)> {
        Corner::ALL
            .iter()
            .flat_map(|&corner| {
                CornerShape::ALL
                    .iter()
                    .map(move |&shape| (corner, shape, source_offset(corner, shape)))
            })
            .collect()
    }

    // Tests all twenty entries are distinct quadrants of the sheet
    // Verified by duplicating the TopLeft Plain entry
    #[test]
    fn test_entries_are_distinct() {
        let offsets: HashSet<SourceOffset> =
            all_offsets().into_iter().map(|(_, _, offset)| offset).collect();
        assert_eq!(offsets.len(), 20);
    }

    // Tests every entry lies on the 16px grid inside the sheet
    // Verified by moving an entry to x = 96
    #[test]
    fn test_entries_fit_sheet_grid() {
        for (corner, shape, offset) in all_offsets() {
            assert_eq!(offset.x % QUADRANT_SIZE, 0, "{corner:?}/{shape:?}");
            assert_eq!(offset.y % QUADRANT_SIZE, 0, "{corner:?}/{shape:?}");
            assert!(offset.x + QUADRANT_SIZE <= SOURCE_SHEET_WIDTH);
            assert!(offset.y + QUADRANT_SIZE <= SOURCE_SHEET_HEIGHT);
        }
    }

    // Tests the preview block in the top-left of the sheet is never sampled
    // Verified by pointing IntCorner at the origin
    #[test]
    fn test_preview_block_unused() {
        for (_, _, offset) in all_offsets() {
            assert!(!(offset.x < 32 && offset.y < 32), "{offset:?}");
        }
    }

    // Tests the quadrant parity matches the corner side
    // Verified by swapping TopLeft and TopRight Plain entries
    #[test]
    fn test_quadrant_parity() {
        for (corner, shape, offset) in all_offsets() {
            let (local_x, local_y) = corner.local_origin();
            assert_eq!(offset.x % 32, local_x, "{corner:?}/{shape:?}");
            assert_eq!(offset.y % 32, local_y, "{corner:?}/{shape:?}");
        }
    }

    // Tests plain quadrants assemble the center tile of the blob
    // Verified by offsetting the BottomRight Plain entry
    #[test]
    fn test_plain_is_center_tile() {
        assert_eq!(
            source_offset(Corner::TopLeft, CornerShape::Plain),
            SourceOffset { x: 32, y: 64 }
        );
        assert_eq!(
            source_offset(Corner::TopRight, CornerShape::Plain),
            SourceOffset { x: 48, y: 64 }
        );
        assert_eq!(
            source_offset(Corner::BottomLeft, CornerShape::Plain),
            SourceOffset { x: 32, y: 80 }
        );
        assert_eq!(
            source_offset(Corner::BottomRight, CornerShape::Plain),
            SourceOffset { x: 48, y: 80 }
        );
    }

    // Tests inner corners come from the top-right block and outer corners from the blob
    // Verified by exchanging the ExtCorner and IntCorner columns
    #[test]
    fn test_corner_entries() {
        assert_eq!(
            source_offset(Corner::TopLeft, CornerShape::ExtCorner),
            SourceOffset { x: 64, y: 0 }
        );
        assert_eq!(
            source_offset(Corner::BottomRight, CornerShape::ExtCorner),
            SourceOffset { x: 80, y: 16 }
        );
        assert_eq!(
            source_offset(Corner::TopLeft, CornerShape::IntCorner),
            SourceOffset { x: 0, y: 32 }
        );
        assert_eq!(
            source_offset(Corner::BottomRight, CornerShape::IntCorner),
            SourceOffset { x: 80, y: 112 }
        );
    }

    // Tests side entries pick the edge tiles of the blob
    // Verified by swapping FirstSide and SecondSide for TopRight
    #[test]
    fn test_side_entries() {
        assert_eq!(
            source_offset(Corner::TopLeft, CornerShape::FirstSide),
            SourceOffset { x: 0, y: 64 }
        );
        assert_eq!(
            source_offset(Corner::TopLeft, CornerShape::SecondSide),
            SourceOffset { x: 32, y: 32 }
        );
        assert_eq!(
            source_offset(Corner::TopRight, CornerShape::FirstSide),
            SourceOffset { x: 48, y: 32 }
        );
        assert_eq!(
            source_offset(Corner::TopRight, CornerShape::SecondSide),
            SourceOffset { x: 80, y: 64 }
        );
        assert_eq!(
            source_offset(Corner::BottomLeft, CornerShape::FirstSide),
            SourceOffset { x: 32, y: 112 }
        );
        assert_eq!(
            source_offset(Corner::BottomLeft, CornerShape::SecondSide),
            SourceOffset { x: 0, y: 80 }
        );
    }

    // Tests padding shifts both axes equally
    // Verified by padding only the x axis
    #[test]
    fn test_padded_offset() {
        let offset = source_offset(Corner::TopRight, CornerShape::ExtCorner).padded(4);
        assert_eq!(offset, SourceOffset { x: 84, y: 4 });
    }

    // Tests huge padding saturates instead of overflowing
    // Verified by adding the padding unchecked
    #[test]
    fn test_padded_offset_saturates() {
        let offset = source_offset(Corner::BottomRight, CornerShape::IntCorner).padded(u32::MAX);
        assert_eq!(offset, SourceOffset { x: u32::MAX, y: u32::MAX });
    }
}
