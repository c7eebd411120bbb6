//! Home / service-detail view switching and in-page anchor scrolling.

use log::debug;

use crate::config::SiteConfig;
use crate::route::{HashError, HashRoute, ServiceId, View};
use crate::surface::{Container, ElementRef, RenderSurface, ScrollBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouterState {
    pub view: View,
}

/// Whether a transition records a new history entry.
///
/// Link activations push; back/forward and the initial load replay a hash the
/// browser already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum History {
    Push,
    Keep,
}

/// Work that must wait for the view switch to render before it can measure.
#[derive(Debug, Clone, PartialEq)]
pub struct Deferred {
    pub delay_ms: u32,
    pub action: DeferredAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    ScrollToSection(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinkOutcome {
    pub prevent_default: bool,
    pub deferred: Option<Deferred>,
}

impl LinkOutcome {
    fn handled() -> Self {
        Self {
            prevent_default: true,
            deferred: None,
        }
    }

    fn ignored() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct ViewRouter {
    state: RouterState,
    nav_height_fallback: f64,
    deferred_scroll_ms: u32,
}

impl ViewRouter {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            state: RouterState::default(),
            nav_height_fallback: config.nav_height_fallback,
            deferred_scroll_ms: config.deferred_scroll_ms,
        }
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    /// Returns false, leaving everything untouched, when the page has no
    /// container for `id`.
    pub fn show_service<S: RenderSurface>(&mut self, id: ServiceId, history: History, surface: &mut S) -> bool {
        if !surface.has_container(Container::Service(id)) {
            debug!("No detail container for service {}", id);
            return false;
        }

        surface.hide_container(Container::Home);
        deactivate_services(surface);
        surface.show_container(Container::Service(id));
        surface.scroll_to(0.0, ScrollBehavior::Smooth);
        if history == History::Push {
            surface.set_history_hash(&HashRoute::Service(id).to_string());
        }

        debug!("View: {:?} -> service {}", self.state.view, id);
        self.state.view = View::ServiceDetail(id);
        true
    }

    pub fn show_home<S: RenderSurface>(&mut self, history: History, surface: &mut S) {
        self.enter_home(surface);
        surface.scroll_to(0.0, ScrollBehavior::Smooth);
        if history == History::Push {
            surface.set_history_hash(&HashRoute::Home.to_string());
        }
    }

    /// Leaves a detail page for a home section. The scroll has to wait until
    /// the home container is laid out again, so it is handed back as a
    /// [`Deferred`] action.
    pub fn navigate_to_section<S: RenderSurface>(&mut self, section: &str, surface: &mut S) -> Option<Deferred> {
        if !is_scroll_target(section, surface) {
            return None;
        }

        self.enter_home(surface);
        surface.set_history_hash(&HashRoute::Section(section.to_string()).to_string());
        Some(Deferred {
            delay_ms: self.deferred_scroll_ms,
            action: DeferredAction::ScrollToSection(section.to_string()),
        })
    }

    /// Smooth-scrolls so the element sits just below the nav bar.
    ///
    /// Detail containers are outside the normal document flow and are never
    /// scroll targets.
    pub fn scroll_to_section<S: RenderSurface>(&self, element_id: &str, surface: &mut S) -> bool {
        self.scroll_to_element(element_id, ScrollBehavior::Smooth, surface)
    }

    fn scroll_to_element<S: RenderSurface>(&self, element_id: &str, behavior: ScrollBehavior, surface: &mut S) -> bool {
        if surface.is_service_container(element_id) {
            return false;
        }
        let Some(target) = surface.measure(&ElementRef::Element(element_id.to_string())) else {
            return false;
        };

        surface.mark_section_visible(element_id);
        let nav_height = surface
            .measure(&ElementRef::NavBar)
            .map(|nav| nav.height)
            .unwrap_or(self.nav_height_fallback);
        surface.scroll_to(target.top - nav_height, behavior);
        true
    }

    pub fn run_deferred<S: RenderSurface>(&mut self, deferred: &Deferred, surface: &mut S) {
        match &deferred.action {
            DeferredAction::ScrollToSection(section) => {
                // The user may have opened a detail page before this fired.
                if self.state.view == View::Home {
                    self.scroll_to_section(section, surface);
                }
            }
        }
    }

    /// Back/forward navigation.
    pub fn on_pop_state<S: RenderSurface>(&mut self, hash: &str, surface: &mut S) {
        match HashRoute::parse(hash) {
            Ok(HashRoute::Service(id)) => {
                self.show_service(id, History::Keep, surface);
            }
            Err(HashError::InvalidServiceId(id)) => {
                debug!("Ignoring service hash with invalid id {:?}", id);
            }
            Ok(HashRoute::Section(section)) => {
                self.show_home(History::Keep, surface);
                self.scroll_to_section(&section, surface);
            }
            Ok(HashRoute::Home) | Err(HashError::Empty) | Err(HashError::Encoding(_)) => {
                self.show_home(History::Keep, surface);
            }
        }
    }

    /// Restores the view named by the hash the page was opened with.
    pub fn on_load<S: RenderSurface>(&mut self, hash: &str, surface: &mut S) {
        match HashRoute::parse(hash) {
            Ok(HashRoute::Service(id)) => {
                self.show_service(id, History::Keep, surface);
            }
            Ok(HashRoute::Section(section)) => {
                // Jump without animating; the page has only just opened.
                self.scroll_to_element(&section, ScrollBehavior::Auto, surface);
            }
            Ok(HashRoute::Home) => {}
            Err(e) => debug!("Load hash {:?} ignored: {}", hash, e),
        }
    }

    /// Click on an anchor whose `href` starts with `#`.
    pub fn on_link_activated<S: RenderSurface>(&mut self, href: &str, surface: &mut S) -> LinkOutcome {
        if !href.starts_with('#') {
            return LinkOutcome::ignored();
        }

        match HashRoute::parse(href) {
            Ok(HashRoute::Service(id)) => {
                self.show_service(id, History::Push, surface);
                LinkOutcome::handled()
            }
            Err(HashError::InvalidServiceId(_)) => LinkOutcome::handled(),
            Ok(HashRoute::Home) => {
                self.show_home(History::Push, surface);
                LinkOutcome::handled()
            }
            Ok(HashRoute::Section(section)) => self.activate_section(&section, surface),
            Err(HashError::Empty) | Err(HashError::Encoding(_)) => LinkOutcome::ignored(),
        }
    }

    fn activate_section<S: RenderSurface>(&mut self, section: &str, surface: &mut S) -> LinkOutcome {
        if !is_scroll_target(section, surface) {
            return LinkOutcome::ignored();
        }

        match self.state.view {
            View::ServiceDetail(_) => LinkOutcome {
                prevent_default: true,
                deferred: self.navigate_to_section(section, surface),
            },
            View::Home => {
                self.scroll_to_section(section, surface);
                surface.set_history_hash(&HashRoute::Section(section.to_string()).to_string());
                LinkOutcome::handled()
            }
        }
    }

    fn enter_home<S: RenderSurface>(&mut self, surface: &mut S) {
        deactivate_services(surface);
        surface.show_container(Container::Home);
        if self.state.view != View::Home {
            debug!("View: {:?} -> home", self.state.view);
        }
        self.state.view = View::Home;
    }
}

fn deactivate_services<S: RenderSurface>(surface: &mut S) {
    for id in surface.service_containers() {
        surface.hide_container(Container::Service(id));
    }
}

fn is_scroll_target<S: RenderSurface>(element_id: &str, surface: &S) -> bool {
    !surface.is_service_container(element_id)
        && surface.measure(&ElementRef::Element(element_id.to_string())).is_some()
}
