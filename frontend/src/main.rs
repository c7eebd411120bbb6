use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod controller;
mod dom;
mod highlight;
mod route;
mod router;
mod surface;
mod site {
    pub mod contact;
    pub mod footer;
    pub mod home;
    pub mod nav;
    pub mod service_detail;
}

use config::SiteConfig;
use controller::SiteController;
use site::{footer::Footer, home::HomePage, nav::Nav, service_detail::ServiceDetails};

const STYLE: &str = r#"
    html { scroll-behavior: smooth; }
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; color: #1d2433; }
    .nav { position: fixed; top: 0; left: 0; right: 0; height: 72px; background: #fff; box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); z-index: 10; }
    .nav__content { max-width: 1100px; margin: 0 auto; height: 100%; display: flex; align-items: center; justify-content: space-between; padding: 0 1.5rem; }
    .nav__logo { font-weight: 700; color: #1d4ed8; text-decoration: none; }
    .nav__menu { list-style: none; display: flex; gap: 1.5rem; margin: 0; padding: 0; }
    .nav__link { color: #1d2433; text-decoration: none; padding-bottom: 4px; border-bottom: 2px solid transparent; }
    .nav__link.active { color: #1d4ed8; border-bottom-color: #1d4ed8; }
    .section { max-width: 1100px; margin: 0 auto; padding: 6rem 1.5rem 4rem; opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease, transform 0.6s ease; }
    .section.visible { opacity: 1; transform: none; }
    .hero { min-height: 80vh; display: flex; align-items: center; }
    .services__grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
    .service-card { border: 1px solid #e5e7eb; border-radius: 12px; padding: 1.5rem; }
    .service-detail { display: none; max-width: 900px; margin: 0 auto; padding: 7rem 1.5rem 4rem; }
    .service-detail.active { display: block; }
    .contact-form { display: grid; gap: 0.75rem; max-width: 560px; }
    .contact-form input, .contact-form textarea { padding: 0.75rem; border: 1px solid #d1d5db; border-radius: 8px; font: inherit; }
    .success-message { color: #15803d; }
    .error-message { color: #b91c1c; }
    .button { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 8px; background: #1d4ed8; color: #fff; text-decoration: none; border: none; cursor: pointer; }
    .button--ghost { background: transparent; color: #1d4ed8; border: 1px solid #1d4ed8; }
    .footer { text-align: center; padding: 2rem; color: #6b7280; }
"#;

#[function_component]
fn App() -> Html {
    // The page is static; all navigation state lives in the controller and
    // is applied straight to the DOM by the window listeners.
    use_effect_with_deps(
        move |_| {
            let config = SiteConfig::load();
            let controller = Rc::new(RefCell::new(SiteController::new(&config)));
            let listeners = dom::start(controller);
            move || {
                if let Some(listeners) = listeners {
                    listeners.detach();
                }
            }
        },
        (),
    );

    html! {
        <>
            <style>{STYLE}</style>
            <Nav />
            <main>
                <HomePage />
                <ServiceDetails />
            </main>
            <Footer />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
