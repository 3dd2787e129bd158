//! Canvas state and its transitions.
//!
//! Every transition borrows the current state and returns a new one; the
//! receiver is never modified. Invalid input (unknown ids, the select tool
//! passed to `add_element`) produces an unchanged copy instead of an error,
//! so a `CanvasState` is well-formed after any sequence of calls:
//!
//! - element ids are unique,
//! - `selected_element_id` is `None` or names an element in `elements`.

use crate::id::ElementId;
use crate::model::{BackgroundImage, Element, ElementPatch, ToolKind, Zoom};
use serde::Serialize;

/// Everything the presentation layer needs to draw the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasState {
    pub background_image: Option<BackgroundImage>,
    /// Paint order: later elements are drawn on top.
    pub elements: Vec<Element>,
    pub selected_element_id: Option<ElementId>,
    pub current_tool: ToolKind,
    pub zoom: Zoom,
}

/// A single state transition, expressed as data.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasAction {
    AddElement { tool: ToolKind, x: f32, y: f32 },
    SelectElement(Option<ElementId>),
    UpdateElement { id: ElementId, patch: ElementPatch },
    DeleteElement(ElementId),
    SetTool(ToolKind),
    SetZoom(Zoom),
    SetBackgroundImage(Option<BackgroundImage>),
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// The element the properties panel should edit, if any.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_element_id.and_then(|id| self.element(id))
    }

    /// Place a default element for `tool` at canvas position (x, y).
    ///
    /// The new element goes on top, becomes the selection, and the tool
    /// drops back to `Select`. With `ToolKind::Select` nothing is placed and
    /// the returned id is `None`.
    pub fn add_element(&self, tool: ToolKind, x: f32, y: f32) -> (CanvasState, Option<ElementId>) {
        let element = match tool {
            ToolKind::Select => return (self.clone(), None),
            ToolKind::Text => Element::text(x, y),
            ToolKind::Hotspot => Element::hotspot(x, y),
        };
        let id = element.id;

        let mut next = self.clone();
        next.elements.push(element);
        next.selected_element_id = Some(id);
        next.current_tool = ToolKind::Select;
        (next, Some(id))
    }

    /// Select `id`, or clear the selection. Unknown ids clear it too.
    pub fn select_element(&self, id: Option<ElementId>) -> CanvasState {
        let mut next = self.clone();
        next.selected_element_id = id.filter(|id| self.contains(*id));
        next
    }

    pub fn update_element(&self, id: ElementId, patch: &ElementPatch) -> CanvasState {
        let mut next = self.clone();
        if let Some(el) = next.elements.iter_mut().find(|el| el.id == id) {
            el.apply_patch(patch);
        }
        next
    }

    pub fn delete_element(&self, id: ElementId) -> CanvasState {
        let mut next = self.clone();
        next.elements.retain(|el| el.id != id);
        if next.selected_element_id == Some(id) {
            next.selected_element_id = None;
        }
        next
    }

    pub fn set_tool(&self, tool: ToolKind) -> CanvasState {
        CanvasState {
            current_tool: tool,
            ..self.clone()
        }
    }

    pub fn set_zoom(&self, zoom: Zoom) -> CanvasState {
        CanvasState {
            zoom,
            ..self.clone()
        }
    }

    /// Swap the background. Any selection refers to the old picture, so
    /// it is cleared.
    pub fn set_background_image(&self, image: Option<BackgroundImage>) -> CanvasState {
        CanvasState {
            background_image: image,
            selected_element_id: None,
            ..self.clone()
        }
    }

    /// Apply one action, returning the next state and, for placements,
    /// the id of the new element.
    pub fn reduce(&self, action: &CanvasAction) -> (CanvasState, Option<ElementId>) {
        match action {
            CanvasAction::AddElement { tool, x, y } => self.add_element(*tool, *x, *y),
            CanvasAction::SelectElement(id) => (self.select_element(*id), None),
            CanvasAction::UpdateElement { id, patch } => (self.update_element(*id, patch), None),
            CanvasAction::DeleteElement(id) => (self.delete_element(*id), None),
            CanvasAction::SetTool(tool) => (self.set_tool(*tool), None),
            CanvasAction::SetZoom(zoom) => (self.set_zoom(*zoom), None),
            CanvasAction::SetBackgroundImage(image) => {
                (self.set_background_image(image.clone()), None)
            }
        }
    }
}
