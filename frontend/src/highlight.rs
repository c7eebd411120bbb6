use log::debug;

use crate::surface::{ElementRef, Geometry, RenderSurface};

/// Finds the section under `scroll_position`. On overlap the last section in
/// document order wins.
pub fn current_section(scroll_position: f64, sections: &[(String, Geometry)]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|(_, geometry)| geometry.contains(scroll_position))
        .map(|(id, _)| id.as_str())
}

/// Keeps the nav link of the section under the viewport marked active and
/// reveals that section.
#[derive(Debug, Clone)]
pub struct ScrollHighlighter {
    lookahead: f64,
    // `None` until the first scroll event has written the links.
    active: Option<Option<String>>,
}

impl ScrollHighlighter {
    pub fn new(lookahead: f64) -> Self {
        Self {
            lookahead,
            active: None,
        }
    }

    /// Geometry is re-read on every call; layout changes between scroll
    /// events are never cached.
    pub fn on_scroll<S: RenderSurface>(&mut self, surface: &mut S) -> Option<String> {
        let scroll_position = surface.scroll_offset() + self.lookahead;
        let sections: Vec<(String, Geometry)> = surface
            .section_ids()
            .into_iter()
            .filter_map(|id| {
                let geometry = surface.measure(&ElementRef::Element(id.clone()))?;
                Some((id, geometry))
            })
            .collect();

        let current = current_section(scroll_position, &sections).map(str::to_owned);
        if self.active.as_ref() != Some(&current) {
            debug!("Active section: {:?}", current);
            surface.set_active_link(current.as_deref());
            if let Some(section) = current.as_deref() {
                surface.mark_section_visible(section);
            }
            self.active = Some(current.clone());
        }
        current
    }
}
