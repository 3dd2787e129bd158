//! Element store: the single owner of the canvas state.
//!
//! Every change goes through `dispatch`, which computes the next state
//! with the pure transitions in `hs_core::state` and swaps it in whole.
//! Readers only ever see a complete state, before or after an action.

use hs_core::{
    BackgroundImage, CanvasAction, CanvasState, ElementId, ElementPatch, ToolKind, Zoom,
};

/// Holds the authoritative `CanvasState`.
#[derive(Debug, Default)]
pub struct ElementStore {
    state: CanvasState,

    /// Bumped on every action that changes the state.
    revision: u64,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an action. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: CanvasAction) -> bool {
        self.commit(&action).0
    }

    fn commit(&mut self, action: &CanvasAction) -> (bool, Option<ElementId>) {
        let (next, created) = self.state.reduce(action);
        if next == self.state {
            log::trace!("no-op {action:?}");
            return (false, created);
        }
        self.state = next;
        self.revision += 1;
        log::debug!("r{} applied {action:?}", self.revision);
        (true, created)
    }

    // ─── Typed operations ────────────────────────────────────────────────

    /// Place a default element; returns its id, or `None` for `Select`.
    pub fn add_element(&mut self, tool: ToolKind, x: f32, y: f32) -> Option<ElementId> {
        self.commit(&CanvasAction::AddElement { tool, x, y }).1
    }

    pub fn select_element(&mut self, id: Option<ElementId>) -> bool {
        self.dispatch(CanvasAction::SelectElement(id))
    }

    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        self.dispatch(CanvasAction::UpdateElement { id, patch })
    }

    pub fn delete_element(&mut self, id: ElementId) -> bool {
        self.dispatch(CanvasAction::DeleteElement(id))
    }

    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        self.dispatch(CanvasAction::SetTool(tool))
    }

    pub fn set_zoom(&mut self, zoom: Zoom) -> bool {
        self.dispatch(CanvasAction::SetZoom(zoom))
    }

    pub fn set_background_image(&mut self, image: Option<BackgroundImage>) -> bool {
        self.dispatch(CanvasAction::SetBackgroundImage(image))
    }
}
