//! Theme - Colors and Typography

pub mod colors;
pub mod typography;
