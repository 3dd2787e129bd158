//! The editor facade wired up by a presentation layer.
//!
//! Owns the element store and the interaction controller, and routes
//! both pointer/keyboard input and form-driven edits to the store.

use crate::controller::InteractionController;
use crate::input::{CanvasRect, InputEvent};
use crate::store::ElementStore;
use hs_core::{
    BackgroundImage, CanvasAction, CanvasConfig, CanvasState, Element, ElementId, ElementPatch,
    LayerEntry, ToolKind, Zoom, layer_list,
};

pub struct Editor {
    store: ElementStore,
    controller: InteractionController,
    config: CanvasConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Editor {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            store: ElementStore::new(),
            controller: InteractionController::new(),
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn state(&self) -> &CanvasState {
        self.store.state()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────

    /// Editor shown: start listening for the delete key.
    pub fn mount(&mut self) {
        if self.controller.subscribe_keyboard() {
            log::debug!("keyboard listener attached");
        }
    }

    /// Editor hidden: stop listening for keys.
    pub fn unmount(&mut self) {
        if self.controller.unsubscribe_keyboard() {
            log::debug!("keyboard listener detached");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.controller.is_keyboard_subscribed()
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Where the canvas surface sits on screen when its top-left corner
    /// is at (left, top) under the current zoom.
    pub fn canvas_rect(&self, left: f32, top: f32) -> CanvasRect {
        CanvasRect::for_surface(left, top, &self.config, self.state().zoom)
    }

    /// Feed one input event. Returns `true` if the state changed.
    pub fn handle_event(&mut self, event: &InputEvent, rect: CanvasRect) -> bool {
        match self.controller.handle_event(self.store.state(), event, rect) {
            Some(action) => self.store.dispatch(action),
            None => false,
        }
    }

    pub fn click(&mut self, x: f32, y: f32, rect: CanvasRect) -> bool {
        self.handle_event(&InputEvent::click(x, y), rect)
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.handle_event(&InputEvent::key(key), CanvasRect::default())
    }

    // ─── Form-driven operations ──────────────────────────────────────────

    pub fn dispatch(&mut self, action: CanvasAction) -> bool {
        self.store.dispatch(action)
    }

    pub fn select_element(&mut self, id: Option<ElementId>) -> bool {
        self.store.select_element(id)
    }

    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        self.store.update_element(id, patch)
    }

    pub fn delete_element(&mut self, id: ElementId) -> bool {
        self.store.delete_element(id)
    }

    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        self.store.set_tool(tool)
    }

    pub fn set_zoom(&mut self, zoom: Zoom) -> bool {
        self.store.set_zoom(zoom)
    }

    pub fn set_background_image(&mut self, image: Option<BackgroundImage>) -> bool {
        self.store.set_background_image(image)
    }

    // ─── Views ───────────────────────────────────────────────────────────

    pub fn selected_element(&self) -> Option<&Element> {
        self.state().selected_element()
    }

    pub fn layers(&self) -> Vec<LayerEntry> {
        layer_list(self.state(), &self.config)
    }
}
