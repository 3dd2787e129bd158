//! Hit testing: point → element lookup.
//!
//! Walks the element list back to front (last painted = topmost) and
//! returns the first element whose bounding region contains the point.

use crate::id::ElementId;
use crate::model::Element;

/// Find the topmost element at canvas position (px, py).
/// Returns `None` if the point is over bare background.
pub fn hit_test(elements: &[Element], px: f32, py: f32) -> Option<ElementId> {
    let hit = elements
        .iter()
        .rev()
        .find(|el| el.contains_point(px, py))
        .map(|el| el.id);
    log::trace!("hit_test ({px}, {py}) -> {hit:?}");
    hit
}
