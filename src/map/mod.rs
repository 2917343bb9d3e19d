//! Map-level ownership of autotile slots

/// Ordered autotile registry
pub mod registry;

pub use registry::AutotileRegistry;
