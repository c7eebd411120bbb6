use yew::prelude::*;

use crate::content::SERVICES;
use crate::dom::HOME_CONTAINER_ID;
use crate::route::HashRoute;
use crate::site::contact::ContactForm;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div id={HOME_CONTAINER_ID} style="display: block;">
            <section id="inicio" class="section hero visible">
                <div class="hero__content">
                    <h1>{"Tecnologia que trabalha para o seu negócio"}</h1>
                    <p>{"Consultoria, desenvolvimento e suporte para empresas que querem crescer sem complicação."}</p>
                    <div class="hero__actions">
                        <a href="#servicos" class="button">{"Conheça os serviços"}</a>
                        <a href="#contato" class="button button--ghost">{"Fale conosco"}</a>
                    </div>
                </div>
            </section>

            <section id="sobre" class="section about">
                <h2>{"Sobre nós"}</h2>
                <p>
                    {"Somos uma equipe pequena e experiente. Atendemos cada cliente de perto, \
                      do primeiro diagnóstico até a entrega e o acompanhamento."}
                </p>
                <ul class="about__numbers">
                    <li><strong>{"12"}</strong>{" anos de mercado"}</li>
                    <li><strong>{"150+"}</strong>{" projetos entregues"}</li>
                    <li><strong>{"98%"}</strong>{" de clientes satisfeitos"}</li>
                </ul>
            </section>

            <section id="servicos" class="section services">
                <h2>{"Serviços"}</h2>
                <div class="services__grid">
                    { for SERVICES.iter().filter_map(|service| {
                        let id = service.service_id()?;
                        Some(html! {
                            <article class="service-card" key={id.get()}>
                                <h3>{service.title}</h3>
                                <p>{service.summary}</p>
                                <a href={HashRoute::Service(id).to_string()} class="service-card__link">
                                    {"Saiba mais →"}
                                </a>
                            </article>
                        })
                    }) }
                </div>
            </section>

            <section id="contato" class="section contact">
                <h2>{"Contato"}</h2>
                <p>{"Conte o que você precisa e retornamos em até um dia útil."}</p>
                <ContactForm />
            </section>
        </div>
    }
}
