use crate::route::ServiceId;

/// Offset and height of an element, read from the render tree on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `top <= position < top + height`.
    pub fn contains(&self, position: f64) -> bool {
        self.top <= position && position < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Home,
    Service(ServiceId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRef {
    NavBar,
    Element(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Auto,
}

/// Everything the router and the highlighter are allowed to do to the page.
///
/// Implementations only read geometry and toggle presentation flags; they own
/// no routing decisions. Missing elements are reported as `false`/`None` and
/// mutations of missing elements are silently ignored.
pub trait RenderSurface {
    fn show_container(&mut self, container: Container);
    fn hide_container(&mut self, container: Container);
    fn has_container(&self, container: Container) -> bool;
    /// True when the element with this id is a service detail container.
    fn is_service_container(&self, element_id: &str) -> bool;
    fn service_containers(&self) -> Vec<ServiceId>;

    fn measure(&self, element: &ElementRef) -> Option<Geometry>;
    fn scroll_offset(&self) -> f64;
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Pushes a new history entry carrying `hash`.
    fn set_history_hash(&mut self, hash: &str);

    /// Ids of the home-page sections in document order.
    fn section_ids(&self) -> Vec<String>;
    fn mark_section_visible(&mut self, element_id: &str);
    /// Clears every nav link, then marks the one targeting `#section_id`.
    fn set_active_link(&mut self, section_id: Option<&str>);
}

#[cfg(test)]
pub mod fake {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;

    /// In-memory page used by the router and highlighter tests.
    #[derive(Debug, Clone, Default)]
    pub struct FakeSurface {
        pub home_visible: bool,
        pub services: BTreeMap<ServiceId, bool>,
        pub sections: Vec<(String, Geometry)>,
        pub visible: BTreeSet<String>,
        pub nav_links: Vec<(String, bool)>,
        pub nav_bar: Option<Geometry>,
        pub scroll_y: f64,
        pub scrolls: Vec<(f64, ScrollBehavior)>,
        pub history: Vec<String>,
    }

    impl FakeSurface {
        pub fn new() -> Self {
            Self {
                home_visible: true,
                nav_links: vec![("home".to_string(), false)],
                ..Default::default()
            }
        }

        pub fn with_services(mut self, count: u32) -> Self {
            for id in 1..=count {
                self.services.insert(ServiceId::new(id).unwrap(), false);
            }
            self
        }

        /// Adds a section and the nav link pointing at it.
        pub fn with_section(mut self, id: &str, top: f64, height: f64) -> Self {
            self.sections.push((id.to_string(), Geometry::new(top, height)));
            self.nav_links.push((id.to_string(), false));
            self
        }

        pub fn with_nav_bar(mut self, height: f64) -> Self {
            self.nav_bar = Some(Geometry::new(0.0, height));
            self
        }

        pub fn active_services(&self) -> Vec<ServiceId> {
            self.services
                .iter()
                .filter(|(_, active)| **active)
                .map(|(id, _)| *id)
                .collect()
        }

        pub fn active_links(&self) -> Vec<&str> {
            self.nav_links
                .iter()
                .filter(|(_, active)| *active)
                .map(|(target, _)| target.as_str())
                .collect()
        }

        pub fn last_hash(&self) -> Option<&str> {
            self.history.last().map(String::as_str)
        }

        pub fn last_scroll(&self) -> Option<f64> {
            self.scrolls.last().map(|(offset, _)| *offset)
        }

        /// What a user would see, for comparing two surfaces.
        pub fn displayed(&self) -> (bool, Vec<ServiceId>) {
            (self.home_visible, self.active_services())
        }
    }

    impl RenderSurface for FakeSurface {
        fn show_container(&mut self, container: Container) {
            match container {
                Container::Home => self.home_visible = true,
                Container::Service(id) => {
                    if let Some(active) = self.services.get_mut(&id) {
                        *active = true;
                    }
                }
            }
        }

        fn hide_container(&mut self, container: Container) {
            match container {
                Container::Home => self.home_visible = false,
                Container::Service(id) => {
                    if let Some(active) = self.services.get_mut(&id) {
                        *active = false;
                    }
                }
            }
        }

        fn has_container(&self, container: Container) -> bool {
            match container {
                Container::Home => true,
                Container::Service(id) => self.services.contains_key(&id),
            }
        }

        fn is_service_container(&self, element_id: &str) -> bool {
            ServiceId::from_container_id(element_id)
                .map_or(false, |id| self.services.contains_key(&id))
        }

        fn service_containers(&self) -> Vec<ServiceId> {
            self.services.keys().copied().collect()
        }

        fn measure(&self, element: &ElementRef) -> Option<Geometry> {
            match element {
                ElementRef::NavBar => self.nav_bar,
                // Sections inside a `display: none` home lay out as 0x0.
                ElementRef::Element(id) => self
                    .sections
                    .iter()
                    .find(|(section, _)| section == id)
                    .map(|(_, geometry)| {
                        if self.home_visible {
                            *geometry
                        } else {
                            Geometry::new(0.0, 0.0)
                        }
                    })
                    .or_else(|| {
                        self.is_service_container(id)
                            .then(|| Geometry::new(0.0, 0.0))
                    }),
            }
        }

        fn scroll_offset(&self) -> f64 {
            self.scroll_y
        }

        fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
            self.scrolls.push((offset, behavior));
        }

        fn set_history_hash(&mut self, hash: &str) {
            self.history.push(hash.to_string());
        }

        fn section_ids(&self) -> Vec<String> {
            self.sections.iter().map(|(id, _)| id.clone()).collect()
        }

        fn mark_section_visible(&mut self, element_id: &str) {
            self.visible.insert(element_id.to_string());
        }

        fn set_active_link(&mut self, section_id: Option<&str>) {
            for (target, active) in self.nav_links.iter_mut() {
                *active = Some(target.as_str()) == section_id;
            }
        }
    }
}
