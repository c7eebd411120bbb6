use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{send, ContactMessage, SimulatedSubmitter, SUCCESS_MESSAGE};

const NOTICE_MS: u32 = 5_000;

#[derive(Clone, PartialEq)]
enum Notice {
    Sent,
    Invalid(String),
}

fn field_input(form: UseStateHandle<ContactMessage>, update: fn(&mut ContactMessage, String)) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let value = match e.target_dyn_into::<HtmlInputElement>() {
            Some(input) => input.value(),
            None => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
        };
        let mut next = (*form).clone();
        update(&mut next, value);
        form.set(next);
    })
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(ContactMessage::default);
    let notice = use_state(|| None::<Notice>);

    // Hide the confirmation after a while.
    {
        let notice_setter = notice.setter();
        use_effect_with_deps(
            move |current: &Option<Notice>| {
                let timeout = (*current == Some(Notice::Sent))
                    .then(|| Timeout::new(NOTICE_MS, move || notice_setter.set(None)));
                move || drop(timeout)
            },
            (*notice).clone(),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match send(&SimulatedSubmitter, (*form).clone()) {
                Ok(_) => {
                    form.set(ContactMessage::default());
                    notice.set(Some(Notice::Sent));
                }
                Err(err) => notice.set(Some(Notice::Invalid(err.to_string()))),
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            {
                match (*notice).as_ref() {
                    Some(Notice::Sent) => html! {
                        <div class="contact-form__notice success-message">{SUCCESS_MESSAGE}</div>
                    },
                    Some(Notice::Invalid(message)) => html! {
                        <div class="contact-form__notice error-message">{message}</div>
                    },
                    None => html! {},
                }
            }
            <input
                type="text"
                name="name"
                placeholder="Nome"
                value={form.name.clone()}
                oninput={field_input(form.clone(), |f, v| f.name = v)}
            />
            <input
                type="email"
                name="email"
                placeholder="E-mail"
                value={form.email.clone()}
                oninput={field_input(form.clone(), |f, v| f.email = v)}
            />
            <input
                type="text"
                name="subject"
                placeholder="Assunto"
                value={form.subject.clone()}
                oninput={field_input(form.clone(), |f, v| f.subject = v)}
            />
            <textarea
                name="message"
                placeholder="Mensagem"
                rows="5"
                value={form.message.clone()}
                oninput={field_input(form.clone(), |f, v| f.message = v)}
            />
            <button type="submit" class="button">{"Enviar mensagem"}</button>
        </form>
    }
}
