//! Clinic UI Library
//!
//! View components for a medical appointment client: visual primitives,
//! controlled and uncontrolled dialogs, error containment, and the doctor and
//! patient dashboard composites built from them.

pub mod app;
pub mod components;
pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod theme;
pub mod utils;
