use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

#[derive(Component, Clone, Debug)]
/// Text component for labels whose content changes at runtime.
///
/// Labels are drawn with raylib's default font, centered horizontally on
/// their [`ScreenPosition`](super::screenposition::ScreenPosition).
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Color of the text.
    pub color: Color,
    /// Cached size of the rendered text, kept by `dynamictext_size_system`.
    size: Vector2,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            size: Vector2::zero(),
        }
    }
    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
    pub fn size(&self) -> Vector2 {
        self.size
    }
    pub fn set_size(&mut self, size: Vector2) {
        self.size = size;
    }
}
