use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::config;
use crate::observe::{RevealMode, RevealObserver};
use crate::state::validate::{self, FormError};

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<FormError>);
    let success = use_state(|| false);

    use_effect_once(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        let document = web_sys::window().and_then(|w| w.document());
        let sections = document
            .as_ref()
            .and_then(|d| RevealObserver::install(d, ".reveal", RevealMode::Single));
        move || {
            if let Some(observer) = sections {
                observer.disconnect();
            }
        }
    });

    // Client-side only: a valid submission clears the form and confirms, it
    // is never sent anywhere.
    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let error = error.clone();
        let success = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate::validate_contact(&name, &email, &message) {
                Ok(accepted) => {
                    log!("Contact form accepted for", accepted.email);
                    error.set(None);
                    success.set(true);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(rejected) => {
                    success.set(false);
                    error.set(Some(rejected));
                }
            }
        })
    };

    let status = if let Some(rejected) = *error {
        html! { <p class="form-status error">{rejected.message()}</p> }
    } else if *success {
        html! { <p class="form-status success">{validate::CONFIRMATION_MESSAGE}</p> }
    } else {
        html! { <p class="form-status"></p> }
    };

    html! {
        <div class="contact-page">
            <section class="contact-hero reveal">
                <h1>{"Contact"}</h1>
                <p>{"Questions, intro sessions, or just want to look around? Drop us a line."}</p>
            </section>

            <section class="contact-body reveal">
                <form class="contact-form" onsubmit={onsubmit}>
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        placeholder="Your name"
                        value={(*name).clone()}
                        oninput={let name = name.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }}
                    />
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        type="text"
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        oninput={let email = email.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        rows="6"
                        placeholder="What are you training for?"
                        value={(*message).clone()}
                        oninput={let message = message.clone(); move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(input.value());
                        }}
                    />
                    <button type="submit">{"Send message"}</button>
                    {status}
                </form>

                <aside class="contact-aside">
                    <h2>{"Find us"}</h2>
                    <p>{"14 Foundry Lane, open 6am to 9pm weekdays, 8am to 2pm weekends."}</p>
                    <p>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </p>
                    <p>
                        <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener">{"@adrfitness"}</a>
                    </p>
                </aside>
            </section>

            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #141414;
                    color: #fff;
                }
                .contact-hero {
                    text-align: center;
                    padding: 5rem 2rem 2.5rem;
                }
                .contact-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #ff6b35);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .contact-hero p {
                    color: #999;
                    max-width: 520px;
                    margin: 0 auto;
                }
                .contact-body {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 1rem 2rem 5rem;
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 3rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .contact-form label {
                    color: #ccc;
                    font-size: 0.9rem;
                    margin-top: 0.8rem;
                }
                .contact-form input,
                .contact-form textarea {
                    background: #1d1d1d;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 6px;
                    padding: 0.7rem 0.9rem;
                    color: #fff;
                    font: inherit;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #ff6b35;
                }
                .contact-form button {
                    margin-top: 1.2rem;
                    align-self: flex-start;
                    padding: 0.8rem 2rem;
                    border: none;
                    border-radius: 6px;
                    background: #ff6b35;
                    color: #141414;
                    font-weight: 700;
                    cursor: pointer;
                }
                .form-status {
                    min-height: 1.4em;
                    margin-top: 0.8rem;
                }
                .form-status.error {
                    color: #ff6b6b;
                }
                .form-status.success {
                    color: #a8ffbf;
                }
                .contact-aside h2 {
                    margin-bottom: 0.8rem;
                }
                .contact-aside p {
                    color: #999;
                    margin-bottom: 0.6rem;
                    line-height: 1.5;
                }
                .contact-aside a {
                    color: #ff6b35;
                    text-decoration: none;
                }
                @media (max-width: 720px) {
                    .contact-body {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
