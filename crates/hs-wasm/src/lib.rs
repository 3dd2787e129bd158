//! WASM bridge for Hotspot Studio: exposes the canvas editor to the
//! browser presentation layer.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the DOM and
//! draws whatever `get_state_json` reports; every pointer, keyboard and
//! form event is forwarded here.

pub mod upload;

use hs_core::{ElementId, ElementPatch, ToolKind, Zoom};
use hs_editor::{CanvasRect, Editor};
use wasm_bindgen::prelude::*;

/// The main WASM-facing editor handle.
#[wasm_bindgen]
pub struct HotspotCanvas {
    editor: Editor,
}

impl Default for HotspotCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl HotspotCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook_setup();
        Self {
            editor: Editor::default(),
        }
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────

    /// Call when the editor becomes visible.
    pub fn mount(&mut self) {
        self.editor.mount();
    }

    /// Call when the editor is torn down.
    pub fn unmount(&mut self) {
        self.editor.unmount();
    }

    // ─── State ───────────────────────────────────────────────────────────

    /// The whole canvas state as JSON.
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(self.editor.state()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Layer list rows as a JSON array.
    pub fn get_layers_json(&self) -> String {
        serde_json::to_string(&self.editor.layers()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Bumped on every state change; lets the page skip redundant redraws.
    pub fn revision(&self) -> f64 {
        self.editor.revision() as f64
    }

    /// The selected element's id, or empty string if none.
    pub fn get_selected_id(&self) -> String {
        self.editor
            .state()
            .selected_element_id
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    /// The selected element as JSON, or `null`.
    pub fn get_selected_json(&self) -> String {
        match self.editor.selected_element() {
            Some(el) => serde_json::to_string(el).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    /// Properties panel header for the selection (`Text Element`,
    /// `Hotspot Element`), or empty string if none.
    pub fn get_selected_kind_label(&self) -> String {
        self.editor
            .selected_element()
            .map(|el| el.kind.kind_label().to_string())
            .unwrap_or_default()
    }

    pub fn get_tool_name(&self) -> String {
        self.editor.state().current_tool.name().to_string()
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Handle a click at screen position (x, y). `left`/`top` locate the
    /// canvas surface on screen. Returns `true` if the state changed.
    pub fn handle_click(&mut self, x: f32, y: f32, left: f32, top: f32) -> bool {
        let rect: CanvasRect = self.editor.canvas_rect(left, top);
        self.editor.click(x, y, rect)
    }

    /// Handle a global keydown. Returns `true` if the state changed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.editor.key_down(key)
    }

    // ─── Toolbar and properties panel ────────────────────────────────────

    /// Switch tool by name (`select`, `text`, `hotspot`).
    /// Unknown names are ignored and return `false`.
    pub fn set_tool(&mut self, name: &str) -> bool {
        match ToolKind::from_name(name) {
            Some(tool) => self.editor.set_tool(tool),
            None => {
                log::warn!("unknown tool {name:?}");
                false
            }
        }
    }

    /// Set the zoom factor; snaps to the nearest offered level.
    pub fn set_zoom(&mut self, factor: f32) -> bool {
        self.editor.set_zoom(Zoom::nearest(factor))
    }

    /// Select an element by id. Empty string, or an id that names no
    /// element, clears the selection.
    pub fn select_by_id(&mut self, element_id: &str) -> bool {
        self.editor.select_element(ElementId::lookup(element_id))
    }

    /// Apply a partial update from the properties form.
    /// Returns JSON: `{"ok":true,"changed":bool}` or `{"ok":false,"error":"..."}`.
    /// A rejected patch leaves the element untouched.
    pub fn update_element(&mut self, element_id: &str, patch_json: &str) -> String {
        let patch = match serde_json::from_str::<ElementPatch>(patch_json) {
            Ok(patch) => patch,
            Err(e) => {
                log::warn!("rejected patch for {element_id}: {e}");
                return error_json(&e.to_string());
            }
        };
        if let Err(e) = patch.validate() {
            log::warn!("rejected patch for {element_id}: {e}");
            return error_json(&e);
        }
        let changed = match ElementId::lookup(element_id) {
            Some(id) => self.editor.update_element(id, patch),
            None => false,
        };
        format!(r#"{{"ok":true,"changed":{changed}}}"#)
    }

    pub fn delete_element(&mut self, element_id: &str) -> bool {
        ElementId::lookup(element_id).is_some_and(|id| self.editor.delete_element(id))
    }

    /// Load an uploaded file as the background.
    /// Returns JSON: `{"ok":true}` or `{"ok":false,"error":"..."}`.
    pub fn set_background_image(&mut self, mime: &str, bytes: &[u8]) -> String {
        match upload::to_data_url(mime, bytes) {
            Ok(image) => {
                self.editor.set_background_image(Some(image));
                r#"{"ok":true}"#.to_string()
            }
            Err(e) => {
                log::warn!("background upload rejected: {e:?}");
                error_json(&e.to_string())
            }
        }
    }

    pub fn clear_background(&mut self) -> bool {
        self.editor.set_background_image(None)
    }
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "ok": false, "error": message }).to_string()
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Hotspot Studio panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone helpers (no canvas needed) ───────────────────────────────

/// Whether a file of this MIME type can be used as a background.
#[wasm_bindgen]
pub fn is_accepted_image_type(mime: &str) -> bool {
    upload::is_accepted(mime)
}

/// Zoom levels offered by the picker, as JSON `[{"factor":0.5,"label":"50%"},...]`.
#[wasm_bindgen]
pub fn zoom_levels_json() -> String {
    let levels: Vec<_> = Zoom::ALL
        .iter()
        .map(|z| serde_json::json!({ "factor": z.factor(), "label": format!("{}%", z.percent()) }))
        .collect();
    serde_json::Value::Array(levels).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(canvas: &HotspotCanvas) -> serde_json::Value {
        serde_json::from_str(&canvas.get_state_json()).unwrap()
    }

    #[test]
    fn place_hotspot_then_edit_it() {
        let mut canvas = HotspotCanvas::new();
        assert!(canvas.set_tool("hotspot"));
        assert!(canvas.handle_click(60.0, 70.0, 10.0, 20.0));

        let id = canvas.get_selected_id();
        assert!(id.starts_with("hotspot_"));
        assert_eq!(canvas.get_tool_name(), "select");

        let json = state(&canvas);
        let el = &json["elements"][0];
        assert_eq!(el["type"], "hotspot");
        assert_eq!(el["x"], 50.0);
        assert_eq!(el["y"], 50.0);

        let reply = canvas.update_element(&id, r##"{"icon":"star","backgroundColor":"#FF0000"}"##);
        assert_eq!(reply, r#"{"ok":true,"changed":true}"#);
        let el = &state(&canvas)["elements"][0];
        assert_eq!(el["icon"], "star");
        assert_eq!(el["backgroundColor"], "#FF0000");
    }

    #[test]
    fn malformed_patch_reports_error() {
        let mut canvas = HotspotCanvas::new();
        canvas.set_tool("text");
        canvas.handle_click(5.0, 40.0, 0.0, 0.0);
        let id = canvas.get_selected_id();

        let reply: serde_json::Value =
            serde_json::from_str(&canvas.update_element(&id, "{not json")).unwrap();
        assert_eq!(reply["ok"], false);
        assert!(reply["error"].is_string());
    }

    #[test]
    fn unknown_tool_is_ignored() {
        let mut canvas = HotspotCanvas::new();
        assert!(!canvas.set_tool("lasso"));
        assert_eq!(canvas.get_tool_name(), "select");
    }

    #[test]
    fn zoom_snaps_to_offered_levels() {
        let mut canvas = HotspotCanvas::new();
        assert!(canvas.set_zoom(1.4));
        assert_eq!(state(&canvas)["zoom"], 1.5);
        assert!(!canvas.set_zoom(1.6));
        assert!(canvas.set_zoom(0.0));
        assert_eq!(state(&canvas)["zoom"], 0.5);
    }

    #[test]
    fn select_by_empty_id_clears() {
        let mut canvas = HotspotCanvas::new();
        canvas.set_tool("text");
        canvas.handle_click(100.0, 100.0, 0.0, 0.0);
        assert!(!canvas.get_selected_id().is_empty());

        assert_eq!(canvas.get_selected_kind_label(), "Text Element");

        assert!(canvas.select_by_id(""));
        assert_eq!(canvas.get_selected_id(), "");
        assert_eq!(canvas.get_selected_json(), "null");
        assert_eq!(canvas.get_selected_kind_label(), "");
    }

    #[test]
    fn stray_ids_from_the_page_are_not_interned() {
        let mut canvas = HotspotCanvas::new();
        canvas.set_tool("hotspot");
        canvas.handle_click(100.0, 100.0, 0.0, 0.0);
        let before = state(&canvas);

        let stray = "hotspot_stale_from_page";
        assert!(!canvas.delete_element(stray));
        assert_eq!(
            canvas.update_element(stray, r#"{"x":5}"#),
            r#"{"ok":true,"changed":false}"#
        );
        assert_eq!(state(&canvas), before);
        assert_eq!(ElementId::lookup(stray), None);

        // An unknown id clears the selection, same as a missing one.
        assert!(canvas.select_by_id(stray));
        assert_eq!(canvas.get_selected_id(), "");
        assert_eq!(ElementId::lookup(stray), None);
    }

    #[test]
    fn empty_text_content_is_reported_back() {
        let mut canvas = HotspotCanvas::new();
        canvas.set_tool("text");
        canvas.handle_click(100.0, 100.0, 0.0, 0.0);
        let id = canvas.get_selected_id();

        let reply: serde_json::Value =
            serde_json::from_str(&canvas.update_element(&id, r#"{"content":"","x":7}"#)).unwrap();
        assert_eq!(
            reply,
            serde_json::json!({ "ok": false, "error": "Text content cannot be empty." })
        );
        let el = &state(&canvas)["elements"][0];
        assert_eq!(el["content"], "New Text");
        assert_eq!(el["x"], 100.0);
    }

    #[test]
    fn delete_key_only_after_mount() {
        let mut canvas = HotspotCanvas::new();
        canvas.set_tool("hotspot");
        canvas.handle_click(100.0, 100.0, 0.0, 0.0);

        assert!(!canvas.handle_key("Delete"));
        canvas.mount();
        assert!(canvas.handle_key("Delete"));
        assert_eq!(state(&canvas)["elements"], serde_json::json!([]));
        canvas.unmount();
    }

    #[test]
    fn background_upload_validates_type() {
        let mut canvas = HotspotCanvas::new();
        let reply: serde_json::Value =
            serde_json::from_str(&canvas.set_background_image("image/gif", b"GIF89a")).unwrap();
        assert_eq!(
            reply,
            serde_json::json!({ "ok": false, "error": "Please upload a JPG or PNG image file." })
        );
        assert_eq!(state(&canvas)["backgroundImage"], serde_json::Value::Null);

        assert_eq!(canvas.set_background_image("image/png", b"abc"), r#"{"ok":true}"#);
        assert_eq!(
            state(&canvas)["backgroundImage"],
            "data:image/png;base64,YWJj"
        );
        assert!(canvas.clear_background());
        assert_eq!(state(&canvas)["backgroundImage"], serde_json::Value::Null);
    }

    #[test]
    fn layers_json_lists_topmost_first_number() {
        let mut canvas = HotspotCanvas::new();
        canvas.set_tool("text");
        canvas.handle_click(100.0, 100.0, 0.0, 0.0);
        canvas.set_tool("hotspot");
        canvas.handle_click(400.0, 400.0, 0.0, 0.0);

        let layers: serde_json::Value = serde_json::from_str(&canvas.get_layers_json()).unwrap();
        assert_eq!(layers[0]["label"], "Text: New Text");
        assert_eq!(layers[0]["layer"], 2);
        assert_eq!(layers[1]["label"], "Hotspot: info");
        assert_eq!(layers[1]["layer"], 1);
        assert_eq!(layers[1]["selected"], true);
    }

    #[test]
    fn zoom_levels_are_listed() {
        let levels: serde_json::Value = serde_json::from_str(&zoom_levels_json()).unwrap();
        assert_eq!(levels[0]["label"], "50%");
        assert_eq!(levels[2]["factor"], 1.5);
    }
}
