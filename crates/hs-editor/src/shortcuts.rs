//! Keyboard shortcut mapping.
//!
//! The editor binds a single key: `Delete` removes the selected element.
//! Modifiers are not consulted, and `Backspace` is left to text fields in
//! the properties panel.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    DeleteSelection,
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// `key` is the `KeyboardEvent.key` value. Returns `None` for keys
    /// with no binding.
    pub fn resolve(key: &str) -> Option<ShortcutAction> {
        match key {
            "Delete" => Some(ShortcutAction::DeleteSelection),
            _ => None,
        }
    }
}
