//! Browser side: [`RenderSurface`] over web-sys and the window listeners
//! that feed [`SiteController`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent, PopStateEvent, ScrollToOptions, Window};

use crate::controller::{SiteController, Trigger};
use crate::route::ServiceId;
use crate::router::Deferred;
use crate::surface::{Container, ElementRef, Geometry, RenderSurface, ScrollBehavior};

pub const HOME_CONTAINER_ID: &str = "homePage";
pub const SERVICE_DETAIL_CLASS: &str = "service-detail";
pub const NAV_SELECTOR: &str = ".nav";
pub const NAV_LINK_CLASS: &str = "nav__link";
pub const SECTION_SELECTOR: &str = "section[id]";

pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    pub fn current_hash(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

fn geometry(element: &HtmlElement) -> Geometry {
    Geometry::new(element.offset_top() as f64, element.offset_height() as f64)
}

impl RenderSurface for DomSurface {
    fn show_container(&mut self, container: Container) {
        match container {
            Container::Home => {
                if let Some(home) = self.html_element(HOME_CONTAINER_ID) {
                    let _ = home.style().set_property("display", "block");
                }
            }
            Container::Service(id) => {
                if let Some(page) = self.element(&id.container_id()) {
                    let _ = page.class_list().add_1("active");
                }
            }
        }
    }

    fn hide_container(&mut self, container: Container) {
        match container {
            Container::Home => {
                if let Some(home) = self.html_element(HOME_CONTAINER_ID) {
                    let _ = home.style().set_property("display", "none");
                }
            }
            Container::Service(id) => {
                if let Some(page) = self.element(&id.container_id()) {
                    let _ = page.class_list().remove_1("active");
                }
            }
        }
    }

    fn has_container(&self, container: Container) -> bool {
        match container {
            Container::Home => self.element(HOME_CONTAINER_ID).is_some(),
            Container::Service(id) => self.is_service_container(&id.container_id()),
        }
    }

    fn is_service_container(&self, element_id: &str) -> bool {
        self.element(element_id)
            .map_or(false, |element| element.class_list().contains(SERVICE_DETAIL_CLASS))
    }

    fn service_containers(&self) -> Vec<ServiceId> {
        self.query_all(&format!(".{}", SERVICE_DETAIL_CLASS))
            .iter()
            .filter_map(|element| ServiceId::from_container_id(&element.id()))
            .collect()
    }

    fn measure(&self, element: &ElementRef) -> Option<Geometry> {
        let element = match element {
            ElementRef::NavBar => self
                .document
                .query_selector(NAV_SELECTOR)
                .ok()
                .flatten()?
                .dyn_into::<HtmlElement>()
                .ok()?,
            ElementRef::Element(id) => self.html_element(id)?,
        };
        Some(geometry(&element))
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn set_history_hash(&mut self, hash: &str) {
        if let Ok(history) = self.window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(hash));
        }
    }

    fn section_ids(&self) -> Vec<String> {
        self.query_all(SECTION_SELECTOR)
            .iter()
            .map(Element::id)
            .filter(|id| !id.is_empty())
            .collect()
    }

    fn mark_section_visible(&mut self, element_id: &str) {
        if let Some(element) = self.element(element_id) {
            let _ = element.class_list().add_1("visible");
        }
    }

    fn set_active_link(&mut self, section_id: Option<&str>) {
        let target = section_id.map(|id| format!("#{}", id));
        for link in self.query_all(&format!(".{}", NAV_LINK_CLASS)) {
            let is_target = target.is_some() && link.get_attribute("href") == target;
            let _ = link.class_list().toggle_with_force("active", is_target);
        }
    }
}

type SharedController = Rc<RefCell<SiteController>>;

fn dispatch(controller: &SharedController, trigger: Trigger) -> bool {
    let Some(mut surface) = DomSurface::from_window() else {
        return false;
    };
    let result = controller.borrow_mut().dispatch(trigger, &mut surface);
    if let Some(deferred) = result.deferred {
        schedule(controller.clone(), deferred);
    }
    result.prevent_default
}

// One-shot and not cancellable; a newer navigation does not clear it.
fn schedule(controller: SharedController, deferred: Deferred) {
    Timeout::new(deferred.delay_ms, move || {
        if let Some(mut surface) = DomSurface::from_window() {
            controller.borrow_mut().run_deferred(&deferred, &mut surface);
        }
    })
    .forget();
}

/// Ctrl/meta/shift/alt clicks open a new tab or window, or download; the
/// browser keeps those.
fn is_modified_click(ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    ctrl || meta || shift || alt
}

/// `href` of the in-page anchor a click landed on, if any.
fn anchor_href(event: &MouseEvent) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let anchor = target.closest("a[href^='#']").ok().flatten()?;
    anchor.get_attribute("href")
}

/// Scroll, popstate and click listeners bound to one controller.
pub struct WindowListeners {
    window: Window,
    document: Document,
    scroll: Closure<dyn FnMut()>,
    pop_state: Closure<dyn FnMut(PopStateEvent)>,
    click: Closure<dyn FnMut(MouseEvent)>,
}

impl WindowListeners {
    pub fn attach(controller: SharedController) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let scroll = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move || {
                dispatch(&controller, Trigger::Scroll);
            }) as Box<dyn FnMut()>)
        };

        let pop_state = {
            let controller = controller.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |_: PopStateEvent| {
                let hash = window.location().hash().unwrap_or_default();
                dispatch(&controller, Trigger::HashChange { hash });
            }) as Box<dyn FnMut(PopStateEvent)>)
        };

        let click = Closure::wrap(Box::new(move |e: MouseEvent| {
            if is_modified_click(e.ctrl_key(), e.meta_key(), e.shift_key(), e.alt_key()) {
                return;
            }
            if let Some(href) = anchor_href(&e) {
                if dispatch(&controller, Trigger::LinkActivated { href }) {
                    e.prevent_default();
                }
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let _ = window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());
        let _ = window.add_event_listener_with_callback("popstate", pop_state.as_ref().unchecked_ref());
        let _ = document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        debug!("Window listeners attached");

        Some(Self {
            window,
            document,
            scroll,
            pop_state,
            click,
        })
    }

    pub fn detach(self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("popstate", self.pop_state.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
        debug!("Window listeners detached");
    }
}

/// Restores the view from the current URL, then starts listening.
pub fn start(controller: SharedController) -> Option<WindowListeners> {
    let hash = DomSurface::from_window()?.current_hash();
    dispatch(&controller, Trigger::Load { hash });
    WindowListeners::attach(controller)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_clicks_are_routed() {
        assert!(!is_modified_click(false, false, false, false));
    }

    #[test]
    fn modified_clicks_are_left_to_the_browser() {
        assert!(is_modified_click(true, false, false, false));
        assert!(is_modified_click(false, true, false, false));
        assert!(is_modified_click(false, false, true, false));
        assert!(is_modified_click(false, false, false, true));
    }
}
