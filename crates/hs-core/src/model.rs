//! Element data model for the hotspot canvas.
//!
//! A design is a flat, ordered list of elements placed over a background
//! image. Each element shares an id and an anchor point; what it looks
//! like (and how it is hit-tested) depends on its `ElementKind`.
//! List order is paint order: the last element is drawn on top.

use crate::id::ElementId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Colors ──────────────────────────────────────────────────────────────

/// 8-bit RGBA color, exchanged with the UI as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Default hotspot fill.
    pub const HOTSPOT_BLUE: Color = Color::rgb(0x21, 0x96, 0xF3);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`; the `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        match bytes.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Uppercase `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color `{s}`")))
    }
}

// ─── Enumerated properties ───────────────────────────────────────────────

/// Text size in pixels, restricted to the sizes offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "f32", into = "u8")]
pub struct FontSize(u8);

impl FontSize {
    pub const ALL: [FontSize; 4] = [FontSize(14), FontSize(18), FontSize(24), FontSize(32)];

    /// Closest allowed size to `px`. Ties go to the smaller size;
    /// non-finite or non-positive input falls back to the smallest.
    pub fn nearest(px: f32) -> Self {
        nearest_of(&Self::ALL, px, |s| s.px())
    }

    pub fn px(self) -> f32 {
        self.0 as f32
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize(18)
    }
}

impl From<f32> for FontSize {
    fn from(px: f32) -> Self {
        FontSize::nearest(px)
    }
}

impl From<FontSize> for u8 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

/// Hotspot marker size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl HotspotSize {
    pub const ALL: [HotspotSize; 3] = [HotspotSize::Small, HotspotSize::Medium, HotspotSize::Large];

    /// Rendered diameter in canvas pixels.
    pub fn diameter(self) -> f32 {
        match self {
            HotspotSize::Small => 20.0,
            HotspotSize::Medium => 30.0,
            HotspotSize::Large => 40.0,
        }
    }

    pub fn radius(self) -> f32 {
        self.diameter() / 2.0
    }

    pub fn name(self) -> &'static str {
        match self {
            HotspotSize::Small => "small",
            HotspotSize::Medium => "medium",
            HotspotSize::Large => "large",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Icon drawn inside a hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotIcon {
    #[default]
    Info,
    Star,
    Heart,
    Home,
    Camera,
}

impl HotspotIcon {
    pub const ALL: [HotspotIcon; 5] = [
        HotspotIcon::Info,
        HotspotIcon::Star,
        HotspotIcon::Heart,
        HotspotIcon::Home,
        HotspotIcon::Camera,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HotspotIcon::Info => "info",
            HotspotIcon::Star => "star",
            HotspotIcon::Heart => "heart",
            HotspotIcon::Home => "home",
            HotspotIcon::Camera => "camera",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.name() == name)
    }
}

/// The active input mode. Determines how a click on empty canvas is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Text,
    Hotspot,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Select, ToolKind::Text, ToolKind::Hotspot];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Text => "text",
            ToolKind::Hotspot => "hotspot",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Canvas scale factor, restricted to the offered zoom levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub enum Zoom {
    Half,
    #[default]
    Actual,
    OneAndHalf,
}

impl Zoom {
    pub const ALL: [Zoom; 3] = [Zoom::Half, Zoom::Actual, Zoom::OneAndHalf];

    pub fn factor(self) -> f32 {
        match self {
            Zoom::Half => 0.5,
            Zoom::Actual => 1.0,
            Zoom::OneAndHalf => 1.5,
        }
    }

    /// Closest zoom level to `factor`. Non-positive or non-finite input
    /// resolves to the smallest level, so the result is always > 0.
    pub fn nearest(factor: f32) -> Self {
        nearest_of(&Self::ALL, factor, |z| z.factor())
    }

    /// Percentage label shown in the zoom picker (`50%`, `100%`, `150%`).
    pub fn percent(self) -> u32 {
        (self.factor() * 100.0).round() as u32
    }
}

impl From<f32> for Zoom {
    fn from(factor: f32) -> Self {
        Zoom::nearest(factor)
    }
}

impl From<Zoom> for f32 {
    fn from(zoom: Zoom) -> Self {
        zoom.factor()
    }
}

/// Pick the candidate closest to `value`; first (smallest) wins ties.
fn nearest_of<T: Copy>(candidates: &[T], value: f32, key: impl Fn(T) -> f32) -> T {
    let first = candidates[0];
    if !value.is_finite() || value <= 0.0 {
        return first;
    }
    let mut best = first;
    let mut best_dist = (key(first) - value).abs();
    for &c in &candidates[1..] {
        let dist = (key(c) - value).abs();
        if dist < best_dist {
            best = c;
            best_dist = dist;
        }
    }
    best
}

// ─── Elements ────────────────────────────────────────────────────────────

/// Visual properties of a text label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    /// Display string. Never empty.
    pub content: String,
    pub font_size: FontSize,
    pub color: Color,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            content: "New Text".into(),
            font_size: FontSize::default(),
            color: Color::BLACK,
        }
    }
}

/// Visual properties of a circular icon hotspot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotProps {
    pub size: HotspotSize,
    pub background_color: Color,
    pub icon: HotspotIcon,
}

impl Default for HotspotProps {
    fn default() -> Self {
        Self {
            size: HotspotSize::default(),
            background_color: Color::HOTSPOT_BLUE,
            icon: HotspotIcon::default(),
        }
    }
}

/// Variant payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// Anchored at its baseline-left point.
    Text(TextProps),
    /// Anchored at its center.
    Hotspot(HotspotProps),
}

impl ElementKind {
    /// Header shown above the properties form.
    pub fn kind_label(&self) -> &'static str {
        match self {
            ElementKind::Text(_) => "Text Element",
            ElementKind::Hotspot(_) => "Hotspot Element",
        }
    }
}

/// A marker placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub id: ElementId,
    /// Canvas-space anchor.
    pub x: f32,
    pub y: f32,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    pub fn new(id: ElementId, x: f32, y: f32, kind: ElementKind) -> Self {
        Self { id, x, y, kind }
    }

    /// A default text label with a freshly generated id.
    pub fn text(x: f32, y: f32) -> Self {
        Self::new(
            ElementId::generate("text"),
            x,
            y,
            ElementKind::Text(TextProps::default()),
        )
    }

    /// A default hotspot with a freshly generated id.
    pub fn hotspot(x: f32, y: f32) -> Self {
        Self::new(
            ElementId::generate("hotspot"),
            x,
            y,
            ElementKind::Hotspot(HotspotProps::default()),
        )
    }

    /// Merge a partial update. `id` and the variant are never touched;
    /// fields that belong to the other variant are skipped.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }

        match &mut self.kind {
            ElementKind::Text(text) => {
                if let Some(content) = &patch.content {
                    if content.is_empty() {
                        log::warn!("ignoring empty content for {}", self.id);
                    } else {
                        text.content = content.clone();
                    }
                }
                if let Some(font_size) = patch.font_size {
                    text.font_size = font_size;
                }
                if let Some(color) = patch.color {
                    text.color = color;
                }
            }
            ElementKind::Hotspot(hotspot) => {
                if let Some(size) = patch.size {
                    hotspot.size = size;
                }
                if let Some(color) = patch.background_color {
                    hotspot.background_color = color;
                }
                if let Some(icon) = patch.icon {
                    hotspot.icon = icon;
                }
            }
        }
    }
}

/// Partial element update coming from the properties form.
///
/// Absent fields are left alone. Deserializes from the same camelCase
/// keys the element serializes to, so the UI can send back only what
/// the user edited.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,

    // Text
    pub content: Option<String>,
    pub font_size: Option<FontSize>,
    pub color: Option<Color>,

    // Hotspot
    pub size: Option<HotspotSize>,
    pub background_color: Option<Color>,
    pub icon: Option<HotspotIcon>,
}

impl ElementPatch {
    /// Check the patch before it reaches an element. `apply_patch` skips
    /// an empty `content` silently; this reports it so the form can
    /// show the rejection.
    pub fn validate(&self) -> Result<(), String> {
        if self.content.as_deref().is_some_and(str::is_empty) {
            return Err("Text content cannot be empty.".to_string());
        }
        Ok(())
    }
}

// ─── Background ──────────────────────────────────────────────────────────

/// Opaque reference to an already-displayable background image
/// (typically a `data:` URL). Never decoded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BackgroundImage(String);

impl BackgroundImage {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
