//! Application Layer
//!
//! Window setup, the shell, and the host state that drives the dashboards.

pub mod application;
pub mod dashboard;
pub mod demo;
pub mod shell;
