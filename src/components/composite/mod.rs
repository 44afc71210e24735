//! Composite Components
//!
//! Dialogs, notices, containers, and error containment built on the
//! primitives.

pub mod alert;
pub mod card;
pub mod confirm_dialog;
pub mod error_boundary;
pub mod modal;

pub use alert::{Alert, AlertKind, AlertProps};
pub use card::{Card, CardShadow};
pub use confirm_dialog::ConfirmDialog;
pub use error_boundary::{DiagnosticSink, ErrorBoundary, TracingSink};
pub use modal::{Modal, ModalWidth};
