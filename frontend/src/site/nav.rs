use yew::prelude::*;

use crate::content::SECTIONS;
use crate::dom::NAV_LINK_CLASS;

/// Plain hash anchors. The `active` class is set by the scroll highlighter.
#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="nav">
            <div class="nav__content">
                <a href="#home" class="nav__logo">{"Servicos & Cia"}</a>
                <ul class="nav__menu">
                    { for SECTIONS.iter().map(|section| html! {
                        <li>
                            <a href={format!("#{}", section.id)} class={NAV_LINK_CLASS}>
                                {section.label}
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}
