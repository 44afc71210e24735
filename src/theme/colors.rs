//! Colors - Clinic Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Clinic color palette - All colors are accessed via associated functions
pub struct ClinicColors;

impl ClinicColors {
    // Brand colors
    /// Primary brand - Teal
    pub fn primary() -> Rgba { rgb(0x0d9488) }
    /// Primary brand, hovered
    pub fn primary_hover() -> Rgba { rgb(0x0f766e) }
    /// Soft primary tint for highlighted surfaces
    pub fn primary_soft() -> Rgba { rgb(0xccfbf1) }
    /// Secondary accent - Indigo
    pub fn accent() -> Rgba { rgb(0x6366f1) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf8fafc) }
    /// Card / panel background
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Muted surface (hover rows, neutral badges)
    pub fn surface_muted() -> Rgba { rgb(0xf1f5f9) }
    /// Modal backdrop
    pub fn backdrop() -> Rgba { rgba(0x0f172a88) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x0f172a) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x475569) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x94a3b8) }
    /// Text on colored backgrounds
    pub fn text_on_color() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Success tint
    pub fn success_soft() -> Rgba { rgb(0xdcfce7) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xd97706) }
    /// Warning tint
    pub fn warning_soft() -> Rgba { rgb(0xfef3c7) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Danger, hovered
    pub fn danger_hover() -> Rgba { rgb(0xb91c1c) }
    /// Danger tint
    pub fn danger_soft() -> Rgba { rgb(0xfee2e2) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x2563eb) }
    /// Info tint
    pub fn info_soft() -> Rgba { rgb(0xdbeafe) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe2e8f0) }
    /// Strong border (outline buttons)
    pub fn border_strong() -> Rgba { rgb(0xcbd5e1) }
}
