//! Avatar Component
//!
//! Round portrait, falling back to the person's initials.

use gpui::{
    App, IntoElement, ObjectFit, ParentElement, RenderOnce, SharedString, Styled, StyledImage,
    Window, div, img, px,
};

use crate::theme::colors::ClinicColors;

/// Avatar size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn pixels(&self) -> f32 {
        match self {
            AvatarSize::Small => 28.0,
            AvatarSize::Medium => 40.0,
            AvatarSize::Large => 56.0,
        }
    }
}

/// Initials for a display name: first letters of the first and last words
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name
        .split_whitespace()
        .filter(|w| !w.ends_with('.'))
        .collect();

    let first = words.first().and_then(|w| w.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|w| w.chars().next())
    } else {
        None
    };

    match (first, last) {
        (None, _) => "?".to_string(),
        (Some(f), None) => f.to_uppercase().collect(),
        (Some(f), Some(l)) => f.to_uppercase().chain(l.to_uppercase()).collect(),
    }
}

#[derive(IntoElement)]
pub struct Avatar {
    name: SharedString,
    image_url: Option<SharedString>,
    size: AvatarSize,
}

impl Avatar {
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
            size: AvatarSize::Medium,
        }
    }

    pub fn image_url(mut self, url: Option<impl Into<SharedString>>) -> Self {
        self.image_url = url.map(Into::into);
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let size = px(self.size.pixels());
        let frame = div()
            .flex_none()
            .size(size)
            .rounded_full()
            .overflow_hidden()
            .flex()
            .items_center()
            .justify_center()
            .bg(ClinicColors::primary_soft())
            .text_color(ClinicColors::primary_hover())
            .text_size(px(self.size.pixels() * 0.4))
            .font_weight(gpui::FontWeight::SEMIBOLD);

        match self.image_url {
            Some(url) => frame.child(img(url.to_string()).size(size).object_fit(ObjectFit::Cover)),
            None => frame.child(initials(&self.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ana Lima"), "AL");
        assert_eq!(initials("maria da silva"), "MS");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("Dr. Ana Lima"), "AL");
        assert_eq!(initials("   "), "?");
    }
}
