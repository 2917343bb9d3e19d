//! Autotile compilation and neighbor-aware layer encoding
//!
//! An autotile source sheet is expanded into a strip of 256 pre-rendered
//! 32x32 variants, one per 8-neighbor adjacency mask. Map layers store
//! autotile cells as negative packed indices `-(slot * 256 + mask + 1)` so a
//! renderer can pick the autotile and its variant from a single integer.

#![forbid(unsafe_code)]

/// Corner classification, source quadrant lookup and strip compilation
pub mod autotile;
/// Input/output operations, CLI, logging and error handling
pub mod io;
/// Layer storage, packed indices and neighbor-mask encoding
pub mod layer;
/// Ordered autotile registry owned by a map
pub mod map;
/// Drawing surface abstraction over image buffers
pub mod surface;

pub use io::error::{AutotileError, Result};
