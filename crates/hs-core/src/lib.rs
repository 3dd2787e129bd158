pub mod config;
pub mod geometry;
pub mod hit;
pub mod id;
pub mod label;
pub mod model;
pub mod state;

pub use config::CanvasConfig;
pub use geometry::{Bounds, element_bounds, to_canvas_space, to_screen_space};
pub use hit::hit_test;
pub use id::ElementId;
pub use label::{LayerEntry, display_label, display_label_with, layer_list};
pub use model::*;
pub use state::{CanvasAction, CanvasState};
