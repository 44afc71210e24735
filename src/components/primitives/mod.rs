//! Primitive Components
//!
//! Stateless building blocks: buttons, badges, avatars, breadcrumbs.

pub mod avatar;
pub mod badge;
pub mod breadcrumbs;
pub mod button;

pub use avatar::{Avatar, AvatarSize};
pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use breadcrumbs::{BreadcrumbItem, Breadcrumbs};
pub use button::{Button, ButtonSize, ButtonVariant};
