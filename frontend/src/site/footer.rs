use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <p>{format!("© {} Servicos & Cia. Todos os direitos reservados.", year)}</p>
            <a href="#home" class="footer__top">{"Voltar ao topo"}</a>
        </footer>
    }
}
