//! Tool system for canvas clicks.
//!
//! Each tool decides what a click on the canvas means. Clicking an
//! existing element always selects it, whatever the tool; tools only
//! differ on clicks over bare background:
//!
//! | Tool | Background click |
//! |------|------------------|
//! | **Select** | Clear selection |
//! | **Text** | Place a text label |
//! | **Hotspot** | Place a hotspot |

use hs_core::{CanvasAction, ElementId, ToolKind};

/// Trait for tools that turn a resolved click into a canvas action.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Handle a click on bare background at canvas point (x, y).
    fn on_background(&self, x: f32, y: f32) -> CanvasAction;

    /// Handle a click at canvas point (x, y); `hit` is the topmost
    /// element under the pointer.
    fn on_click(&self, x: f32, y: f32, hit: Option<ElementId>) -> CanvasAction {
        match hit {
            Some(id) => CanvasAction::SelectElement(Some(id)),
            None => self.on_background(x, y),
        }
    }
}

// ─── Select Tool ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy)]
pub struct SelectTool;

impl Tool for SelectTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Select
    }

    fn on_background(&self, _x: f32, _y: f32) -> CanvasAction {
        CanvasAction::SelectElement(None)
    }
}

// ─── Placement Tools ─────────────────────────────────────────────────────

/// One-shot placement of a text label or hotspot. The store switches
/// back to `Select` once the element is placed.
#[derive(Debug, Clone, Copy)]
pub struct PlaceTool {
    kind: ToolKind,
}

impl PlaceTool {
    pub fn text() -> Self {
        Self {
            kind: ToolKind::Text,
        }
    }

    pub fn hotspot() -> Self {
        Self {
            kind: ToolKind::Hotspot,
        }
    }
}

impl Tool for PlaceTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn on_background(&self, x: f32, y: f32) -> CanvasAction {
        CanvasAction::AddElement {
            tool: self.kind,
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_tool_selects_hit_and_clears_on_miss() {
        let tool = SelectTool;
        let target = ElementId::intern("tool_target");
        assert_eq!(
            tool.on_click(5.0, 5.0, Some(target)),
            CanvasAction::SelectElement(Some(target))
        );
        assert_eq!(
            tool.on_click(5.0, 5.0, None),
            CanvasAction::SelectElement(None)
        );
    }

    #[test]
    fn place_tool_adds_on_miss() {
        let tool = PlaceTool::hotspot();
        assert_eq!(tool.kind(), ToolKind::Hotspot);
        assert_eq!(
            tool.on_click(40.0, 60.0, None),
            CanvasAction::AddElement {
                tool: ToolKind::Hotspot,
                x: 40.0,
                y: 60.0
            }
        );
    }

    #[test]
    fn place_tool_selects_instead_of_placing_on_hit() {
        let tool = PlaceTool::text();
        let target = ElementId::intern("tool_existing");
        assert_eq!(
            tool.on_click(40.0, 60.0, Some(target)),
            CanvasAction::SelectElement(Some(target))
        );
    }
}
