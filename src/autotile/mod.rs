//! Autotile classification, quadrant lookup and strip compilation

/// Autotile sheet compilation into a 256-variant strip
pub mod compiler;
/// Corner quadrants and their shape classification
pub mod corner;
/// Neighbor directions and the 8-bit neighbor mask
pub mod direction;
/// Fixed source quadrant table of the autotile sheet layout
pub mod variant_table;

pub use compiler::{Autotile, AutotileInfo};
pub use corner::{Corner, CornerShape, classify};
pub use direction::{Direction, NeighborMask};
