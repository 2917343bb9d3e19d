//! Layer storage, packed index codec and neighbor-mask encoding

/// Neighbor-mask encoding of packed autotile cells
pub mod encoder;
/// Row-major layer storage
pub mod grid;
/// Packed signed tile indices and tagged cells
pub mod index;
/// Tagged grid with idempotent resolution
pub mod tagged;

pub use encoder::{encode_autotile_slot, encode_packed_slot};
pub use grid::{Layer, LayerSize};
pub use index::{AutotileSlot, TileCell, belongs_to_slot, decode, pack};
pub use tagged::TileGrid;
