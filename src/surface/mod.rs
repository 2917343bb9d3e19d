//! Drawing surface abstraction

/// Surface trait and rectangle copies for `image` buffers
pub mod blit;

pub use blit::{Region, Surface};
