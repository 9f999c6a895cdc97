//! Common utility functions

pub mod mask;

// Re-export commonly used utilities
pub use mask::*;
