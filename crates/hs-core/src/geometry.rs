//! Screen ↔ canvas coordinate mapping and element bounding regions.
//!
//! The canvas surface is rendered scaled by the zoom factor with its
//! transform origin at the top-left corner, so a canvas point `c` lands
//! on screen at `origin + c * zoom`. `to_canvas_space` is the inverse of
//! that mapping, rounded to whole canvas pixels.

use crate::model::{Element, ElementKind, Zoom};

/// Average glyph advance as a fraction of the font size.
pub const TEXT_WIDTH_FACTOR: f32 = 0.6;

/// Line box height as a multiple of the font size.
pub const TEXT_HEIGHT_FACTOR: f32 = 1.2;

/// Map a screen-space pointer position to canvas space.
///
/// `origin` is the on-screen top-left corner of the canvas surface.
/// Both coordinates are rounded to the nearest integer.
pub fn to_canvas_space(pointer: (f32, f32), origin: (f32, f32), zoom: Zoom) -> (f32, f32) {
    let z = zoom.factor();
    (
        ((pointer.0 - origin.0) / z).round(),
        ((pointer.1 - origin.1) / z).round(),
    )
}

/// Map a canvas-space point to the screen position it renders at.
pub fn to_screen_space(canvas: (f32, f32), origin: (f32, f32), zoom: Zoom) -> (f32, f32) {
    let z = zoom.factor();
    (origin.0 + canvas.0 * z, origin.1 + canvas.1 * z)
}

/// Axis-aligned box in canvas space. Edges count as inside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left && px <= self.right && py >= self.top && py <= self.bottom
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Clickable region of an element.
///
/// Text uses a monospace estimate (`chars × size × 0.6` wide,
/// `size × 1.2` tall) extending up and right from the baseline-left
/// anchor; it does not measure real glyphs, so proportional fonts can
/// render slightly wider or narrower than the region. Hotspots are
/// tested against the square circumscribing their circle.
pub fn element_bounds(element: &Element) -> Bounds {
    match &element.kind {
        ElementKind::Text(text) => {
            let size = text.font_size.px();
            let width = text.content.chars().count() as f32 * size * TEXT_WIDTH_FACTOR;
            let height = size * TEXT_HEIGHT_FACTOR;
            Bounds {
                left: element.x,
                top: element.y - height,
                right: element.x + width,
                bottom: element.y,
            }
        }
        ElementKind::Hotspot(hotspot) => {
            let r = hotspot.size.radius();
            Bounds {
                left: element.x - r,
                top: element.y - r,
                right: element.x + r,
                bottom: element.y + r,
            }
        }
    }
}

impl Element {
    pub fn bounds(&self) -> Bounds {
        element_bounds(self)
    }

    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        self.bounds().contains(px, py)
    }
}
