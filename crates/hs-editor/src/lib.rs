pub mod controller;
pub mod editor;
pub mod input;
pub mod shortcuts;
pub mod store;
pub mod tools;

pub use controller::InteractionController;
pub use editor::Editor;
pub use input::{CanvasRect, InputEvent};
pub use store::ElementStore;
