//! Editor-wide configuration.

/// Configuration shared by the geometry, labeling, and interaction layers.
///
/// The defaults describe the stock editor: an 800×600 canvas surface and
/// layer labels that truncate text content after 20 characters.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Canvas surface width in canvas-space pixels. Default: **800**.
    pub width: f32,

    /// Canvas surface height in canvas-space pixels. Default: **600**.
    pub height: f32,

    /// Characters of text content shown in a layer label before it is
    /// truncated with `...`. Default: **20**.
    pub label_max_chars: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            label_max_chars: 20,
        }
    }
}

