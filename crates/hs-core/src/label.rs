//! Human-readable names for elements, as shown in the layer list.

use crate::config::CanvasConfig;
use crate::id::ElementId;
use crate::model::{Element, ElementKind};
use crate::state::CanvasState;
use serde::Serialize;

/// Layer-list label using the default truncation length.
pub fn display_label(element: &Element) -> String {
    display_label_with(element, CanvasConfig::default().label_max_chars)
}

/// `Text: <content>` (truncated to `max_chars` with a trailing `...`)
/// or `Hotspot: <icon>`.
pub fn display_label_with(element: &Element, max_chars: usize) -> String {
    match &element.kind {
        ElementKind::Text(text) => {
            let mut chars = text.content.chars();
            let head: String = chars.by_ref().take(max_chars).collect();
            if chars.next().is_some() {
                format!("Text: {head}...")
            } else {
                format!("Text: {head}")
            }
        }
        ElementKind::Hotspot(hotspot) => format!("Hotspot: {}", hotspot.icon.name()),
    }
}

/// One row of the layer list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerEntry {
    pub id: ElementId,
    pub label: String,
    /// 1-based position counted from the top of the stack: the topmost
    /// element is layer 1.
    pub layer: usize,
    pub selected: bool,
}

/// Rows for every element, in paint order.
pub fn layer_list(state: &CanvasState, config: &CanvasConfig) -> Vec<LayerEntry> {
    let count = state.elements.len();
    state
        .elements
        .iter()
        .enumerate()
        .map(|(index, el)| LayerEntry {
            id: el.id,
            label: display_label_with(el, config.label_max_chars),
            layer: count - index,
            selected: state.selected_element_id == Some(el.id),
        })
        .collect()
}
