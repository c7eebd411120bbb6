//! Single entry point for every browser event the site reacts to.

use log::debug;

use crate::config::SiteConfig;
use crate::highlight::ScrollHighlighter;
use crate::route::View;
use crate::router::{Deferred, ViewRouter};
use crate::surface::RenderSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Load { hash: String },
    HashChange { hash: String },
    Scroll,
    LinkActivated { href: String },
}

/// What the event listener has to do once the controller returns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dispatch {
    pub prevent_default: bool,
    pub deferred: Option<Deferred>,
}

#[derive(Debug, Clone)]
pub struct SiteController {
    router: ViewRouter,
    highlighter: ScrollHighlighter,
}

impl SiteController {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            router: ViewRouter::new(config),
            highlighter: ScrollHighlighter::new(config.scroll_lookahead),
        }
    }

    pub fn view(&self) -> View {
        self.router.view()
    }

    pub fn dispatch<S: RenderSurface>(&mut self, trigger: Trigger, surface: &mut S) -> Dispatch {
        debug!("Dispatching {:?}", trigger);
        let before = self.view();
        let dispatch = self.route(trigger, surface);
        // A view switch can change what is under the viewport without any
        // scroll event firing (e.g. already at the top).
        if self.view() != before {
            self.highlighter.on_scroll(surface);
        }
        dispatch
    }

    fn route<S: RenderSurface>(&mut self, trigger: Trigger, surface: &mut S) -> Dispatch {
        match trigger {
            Trigger::Load { hash } => {
                self.router.on_load(&hash, surface);
                self.highlighter.on_scroll(surface);
                Dispatch::default()
            }
            Trigger::HashChange { hash } => {
                self.router.on_pop_state(&hash, surface);
                Dispatch::default()
            }
            Trigger::Scroll => {
                self.highlighter.on_scroll(surface);
                Dispatch::default()
            }
            Trigger::LinkActivated { href } => {
                let outcome = self.router.on_link_activated(&href, surface);
                Dispatch {
                    prevent_default: outcome.prevent_default,
                    deferred: outcome.deferred,
                }
            }
        }
    }

    pub fn run_deferred<S: RenderSurface>(&mut self, deferred: &Deferred, surface: &mut S) {
        self.router.run_deferred(deferred, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::ServiceId;
    use crate::surface::fake::FakeSurface;

    fn page() -> FakeSurface {
        FakeSurface::new()
            .with_services(3)
            .with_nav_bar(70.0)
            .with_section("inicio", 0.0, 600.0)
            .with_section("sobre", 600.0, 500.0)
            .with_section("contato", 1100.0, 400.0)
    }

    fn link(href: &str) -> Trigger {
        Trigger::LinkActivated { href: href.to_string() }
    }

    #[test]
    fn load_restores_view_and_highlights() {
        let mut surface = page();
        let mut controller = SiteController::new(&SiteConfig::default());

        let dispatch = controller.dispatch(Trigger::Load { hash: "#servico-2".into() }, &mut surface);

        assert_eq!(dispatch, Dispatch::default());
        assert_eq!(controller.view(), View::ServiceDetail(ServiceId::new(2).unwrap()));
        assert!(surface.active_links().is_empty());
    }

    #[test]
    fn load_without_hash_highlights_and_reveals_the_first_section() {
        let mut surface = page();
        let mut controller = SiteController::new(&SiteConfig::default());

        controller.dispatch(Trigger::Load { hash: String::new() }, &mut surface);

        assert_eq!(surface.active_links(), vec!["inicio"]);
        assert!(surface.visible.contains("inicio"));
    }

    #[test]
    fn plain_scrolling_reveals_every_section() {
        let mut surface = page();
        let mut controller = SiteController::new(&SiteConfig::default());
        controller.dispatch(Trigger::Load { hash: String::new() }, &mut surface);

        for y in [0.0, 600.0, 1100.0, 1300.0] {
            surface.scroll_y = y;
            controller.dispatch(Trigger::Scroll, &mut surface);
        }

        for section in ["inicio", "sobre", "contato"] {
            assert!(surface.visible.contains(section), "{section} should be visible");
        }
    }

    #[test]
    fn returning_home_at_the_top_restores_the_highlight() {
        let mut surface = page();
        let mut controller = SiteController::new(&SiteConfig::default());
        controller.dispatch(Trigger::Load { hash: String::new() }, &mut surface);

        controller.dispatch(link("#servico-2"), &mut surface);
        assert!(surface.active_links().is_empty());

        controller.dispatch(Trigger::HashChange { hash: "#home".into() }, &mut surface);
        assert_eq!(surface.active_links(), vec!["inicio"]);

        controller.dispatch(link("#servico-1"), &mut surface);
        controller.dispatch(link("#home"), &mut surface);
        assert_eq!(surface.active_links(), vec!["inicio"]);
    }

    #[test]
    fn scroll_updates_active_link() {
        let mut surface = page();
        let mut controller = SiteController::new(&SiteConfig::default());

        surface.scroll_y = 1050.0;
        controller.dispatch(Trigger::Scroll, &mut surface);

        assert_eq!(surface.active_links(), vec!["contato"]);
    }

    #[test]
    fn section_link_from_detail_round_trip() {
        let mut surface = page();
        let mut controller = SiteController::new(&SiteConfig::default());
        controller.dispatch(link("#servico-1"), &mut surface);

        let dispatch = controller.dispatch(link("#sobre"), &mut surface);
        assert!(dispatch.prevent_default);
        let deferred = dispatch.deferred.expect("deferred scroll");
        controller.run_deferred(&deferred, &mut surface);

        assert_eq!(controller.view(), View::Home);
        assert!(surface.home_visible);
        assert!(surface.active_services().is_empty());
        assert_eq!(surface.last_scroll(), Some(600.0 - 70.0));
        assert_eq!(surface.last_hash(), Some("#sobre"));
    }

    #[test]
    fn hash_change_follows_history() {
        let mut surface = page();
        let mut controller = SiteController::new(&SiteConfig::default());
        controller.dispatch(link("#servico-3"), &mut surface);

        controller.dispatch(Trigger::HashChange { hash: "#home".into() }, &mut surface);
        assert_eq!(controller.view(), View::Home);

        controller.dispatch(Trigger::HashChange { hash: "#servico-3".into() }, &mut surface);
        assert_eq!(controller.view(), View::ServiceDetail(ServiceId::new(3).unwrap()));
        assert_eq!(surface.history, vec!["#servico-3"]);
    }

    #[test]
    fn lookahead_comes_from_config() {
        let mut surface = page();
        let config = SiteConfig {
            scroll_lookahead: 0.0,
            ..SiteConfig::default()
        };
        let mut controller = SiteController::new(&config);

        surface.scroll_y = 550.0;
        controller.dispatch(Trigger::Scroll, &mut surface);

        assert_eq!(surface.active_links(), vec!["inicio"]);
    }
}
