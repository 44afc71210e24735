//! Utils - Utility Functions

pub mod format;
