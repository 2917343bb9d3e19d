//! Input/output, command-line handling and ambient configuration

/// Command-line parsing and batch compilation
pub mod cli;
/// Layout constants and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG loading and strip export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for batch compilation
pub mod progress;
