use yew::prelude::*;

use crate::content::{Service, SERVICES};
use crate::dom::SERVICE_DETAIL_CLASS;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub id: u32,
}

/// Hidden until the router adds `active` to its container.
#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = SERVICES.iter().find(|s| s.id == props.id) else {
        return html! {};
    };
    let Some(id) = service.service_id() else {
        return html! {};
    };

    html! {
        <div id={id.container_id()} class={SERVICE_DETAIL_CLASS}>
            <a href="#servicos" class="service-detail__back">{"← Voltar aos serviços"}</a>
            <h1>{service.title}</h1>
            <p class="service-detail__summary">{service.summary}</p>
            <p>{service.description}</p>
            <h2>{"O que entregamos"}</h2>
            <ul>
                { for service.deliverables.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
            <a href="#contato" class="button">{"Solicitar orçamento"}</a>
        </div>
    }
}

#[function_component(ServiceDetails)]
pub fn service_details() -> Html {
    html! {
        <>
            { for SERVICES.iter().map(|service: &Service| html! {
                <ServiceDetail key={service.id} id={service.id} />
            }) }
        </>
    }
}
