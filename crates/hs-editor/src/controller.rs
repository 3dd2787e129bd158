//! Interaction controller: raw input → canvas actions.
//!
//! The controller is a state machine over the current tool. It reads the
//! canvas state but never writes it; whatever it decides comes back as a
//! `CanvasAction` for the store to apply.

use crate::input::{CanvasRect, InputEvent};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::{PlaceTool, SelectTool, Tool};
use hs_core::{CanvasAction, CanvasState, ToolKind, hit_test, to_canvas_space};

pub struct InteractionController {
    select_tool: SelectTool,
    text_tool: PlaceTool,
    hotspot_tool: PlaceTool,

    /// Whether the global key listener is attached (editor mounted).
    keyboard_subscribed: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            select_tool: SelectTool,
            text_tool: PlaceTool::text(),
            hotspot_tool: PlaceTool::hotspot(),
            keyboard_subscribed: false,
        }
    }

    fn tool(&self, kind: ToolKind) -> &dyn Tool {
        match kind {
            ToolKind::Select => &self.select_tool,
            ToolKind::Text => &self.text_tool,
            ToolKind::Hotspot => &self.hotspot_tool,
        }
    }

    // ─── Keyboard subscription ───────────────────────────────────────────

    /// Attach the key listener. Returns `false` if it was already attached.
    pub fn subscribe_keyboard(&mut self) -> bool {
        let attached = !self.keyboard_subscribed;
        self.keyboard_subscribed = true;
        attached
    }

    /// Detach the key listener. Returns `false` if it was not attached.
    pub fn unsubscribe_keyboard(&mut self) -> bool {
        let detached = self.keyboard_subscribed;
        self.keyboard_subscribed = false;
        detached
    }

    pub fn is_keyboard_subscribed(&self) -> bool {
        self.keyboard_subscribed
    }

    // ─── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(
        &self,
        state: &CanvasState,
        event: &InputEvent,
        rect: CanvasRect,
    ) -> Option<CanvasAction> {
        match event {
            InputEvent::Click { x, y } => self.handle_click(state, *x, *y, rect),
            InputEvent::Key { key } => self.handle_key(state, key),
        }
    }

    /// Resolve a click at screen position (x, y).
    ///
    /// Clicks outside `rect` never reach the canvas and yield `None`.
    pub fn handle_click(
        &self,
        state: &CanvasState,
        x: f32,
        y: f32,
        rect: CanvasRect,
    ) -> Option<CanvasAction> {
        if !rect.contains(x, y) {
            log::trace!("click ({x}, {y}) outside canvas {rect:?}");
            return None;
        }
        let (cx, cy) = to_canvas_space((x, y), rect.origin(), state.zoom);
        let hit = hit_test(&state.elements, cx, cy);
        let tool = self.tool(state.current_tool);
        log::trace!("{} click at ({cx}, {cy}), hit {hit:?}", tool.kind().name());
        Some(tool.on_click(cx, cy, hit))
    }

    /// Resolve a key press. Ignored while the keyboard is unsubscribed.
    pub fn handle_key(&self, state: &CanvasState, key: &str) -> Option<CanvasAction> {
        if !self.keyboard_subscribed {
            return None;
        }
        match ShortcutMap::resolve(key)? {
            ShortcutAction::DeleteSelection => state
                .selected_element_id
                .map(CanvasAction::DeleteElement),
        }
    }
}
