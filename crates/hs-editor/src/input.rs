//! Input abstraction layer.
//!
//! Normalizes the raw events the presentation layer forwards (pointer
//! clicks in screen coordinates, key presses) into `InputEvent`s.

use hs_core::{CanvasConfig, Zoom};

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary-button click at a screen position.
    Click { x: f32, y: f32 },

    /// Key press, identified by its `KeyboardEvent.key` value.
    Key { key: String },
}

impl InputEvent {
    pub fn click(x: f32, y: f32) -> Self {
        Self::Click { x, y }
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self::Key { key: key.into() }
    }
}

/// On-screen bounding box of the (scaled) canvas surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The box a surface of `config` size occupies at `zoom` when its
    /// top-left corner sits at (left, top).
    pub fn for_surface(left: f32, top: f32, config: &CanvasConfig, zoom: Zoom) -> Self {
        let z = zoom.factor();
        Self::new(left, top, config.width * z, config.height * z)
    }

    pub fn origin(&self) -> (f32, f32) {
        (self.left, self.top)
    }

    /// Edges inclusive.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}
