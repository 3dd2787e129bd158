//! Integration tests: clicks and keys driving the editor end to end
//! (hs-editor controller + store ↔ hs-core geometry and state).

use hs_core::{ElementKind, ElementPatch, HotspotSize, ToolKind, Zoom};
use hs_editor::{CanvasRect, Editor};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn editor() -> (Editor, CanvasRect) {
    init_logging();
    let editor = Editor::default();
    let rect = editor.canvas_rect(0.0, 0.0);
    (editor, rect)
}

// ─── Placement ──────────────────────────────────────────────────────────

#[test]
fn hotspot_click_places_then_selects() {
    let (mut editor, rect) = editor();
    editor.set_tool(ToolKind::Hotspot);

    assert!(editor.click(50.0, 50.0, rect));
    let state = editor.state();
    assert_eq!(state.elements.len(), 1);
    let placed = &state.elements[0];
    assert!(matches!(placed.kind, ElementKind::Hotspot(_)));
    assert_eq!((placed.x, placed.y), (50.0, 50.0));
    assert_eq!(state.current_tool, ToolKind::Select);
    let id = placed.id;

    // Clicking the same spot again hits the hotspot instead of placing.
    editor.select_element(None);
    assert!(editor.click(50.0, 50.0, rect));
    assert_eq!(editor.state().elements.len(), 1);
    assert_eq!(editor.state().selected_element_id, Some(id));
}

#[test]
fn click_on_existing_element_wins_over_placement_tool() {
    let (mut editor, rect) = editor();
    editor.set_tool(ToolKind::Hotspot);
    editor.click(50.0, 50.0, rect);
    let first = editor.state().elements[0].id;

    editor.set_tool(ToolKind::Text);
    editor.select_element(None);
    editor.click(55.0, 45.0, rect);

    assert_eq!(editor.state().elements.len(), 1);
    assert_eq!(editor.state().selected_element_id, Some(first));
    // Tool stays armed since nothing was placed.
    assert_eq!(editor.state().current_tool, ToolKind::Text);
}

#[test]
fn placement_respects_zoom_and_canvas_offset() {
    let (mut editor, _) = editor();
    editor.set_zoom(Zoom::OneAndHalf);
    editor.set_tool(ToolKind::Text);
    let rect = editor.canvas_rect(40.0, 20.0);

    assert!(editor.click(190.0, 170.0, rect));
    let el = &editor.state().elements[0];
    assert_eq!((el.x, el.y), (100.0, 100.0));
}

// ─── Selection ──────────────────────────────────────────────────────────

#[test]
fn overlapping_click_selects_topmost() {
    let (mut editor, rect) = editor();
    editor.set_tool(ToolKind::Hotspot);
    editor.click(100.0, 100.0, rect);
    let bottom = editor.state().elements[0].id;
    editor.update_element(
        bottom,
        ElementPatch {
            size: Some(HotspotSize::Large),
            ..Default::default()
        },
    );

    // Place the second hotspot just outside the first one's region.
    editor.set_tool(ToolKind::Hotspot);
    editor.click(130.0, 100.0, rect);
    let top = editor.state().elements[1].id;
    editor.update_element(
        top,
        ElementPatch {
            x: Some(110.0),
            ..Default::default()
        },
    );

    editor.click(105.0, 100.0, rect);
    assert_eq!(editor.state().selected_element_id, Some(top));

    editor.click(85.0, 100.0, rect);
    assert_eq!(editor.state().selected_element_id, Some(bottom));
}

#[test]
fn empty_click_in_select_mode_deselects() {
    let (mut editor, rect) = editor();
    editor.set_tool(ToolKind::Text);
    editor.click(300.0, 300.0, rect);
    assert!(editor.state().selected_element_id.is_some());

    assert!(editor.click(700.0, 50.0, rect));
    assert_eq!(editor.state().selected_element_id, None);
    assert_eq!(editor.state().elements.len(), 1);
}

#[test]
fn click_outside_surface_changes_nothing() {
    let (mut editor, rect) = editor();
    editor.set_tool(ToolKind::Hotspot);
    assert!(!editor.click(801.0, 50.0, rect));
    assert!(editor.state().elements.is_empty());
    assert_eq!(editor.state().current_tool, ToolKind::Hotspot);
}

// ─── Keyboard ───────────────────────────────────────────────────────────

#[test]
fn delete_key_removes_selection_only() {
    let (mut editor, rect) = editor();
    editor.mount();
    editor.set_tool(ToolKind::Text);
    editor.click(100.0, 100.0, rect);
    editor.set_tool(ToolKind::Hotspot);
    editor.click(400.0, 400.0, rect);
    let remaining = editor.state().elements[0].id;

    assert!(editor.key_down("Delete"));
    assert_eq!(editor.state().elements.len(), 1);
    assert_eq!(editor.state().elements[0].id, remaining);
    assert_eq!(editor.state().selected_element_id, None);

    // Nothing selected: Delete is a no-op.
    assert!(!editor.key_down("Delete"));
    assert_eq!(editor.state().elements.len(), 1);
}

// ─── Layers ─────────────────────────────────────────────────────────────

#[test]
fn layers_reflect_edits() {
    let (mut editor, rect) = editor();
    editor.set_tool(ToolKind::Text);
    editor.click(10.0, 50.0, rect);
    let id = editor.state().elements[0].id;
    editor.update_element(
        id,
        ElementPatch {
            content: Some("Entrance to the north gallery".into()),
            ..Default::default()
        },
    );

    let layers = editor.layers();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].label, "Text: Entrance to the nort...");
    assert_eq!(layers[0].layer, 1);
    assert!(layers[0].selected);
}
