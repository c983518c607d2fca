use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod observe;
mod components {
    pub mod footer;
    pub mod lightbox;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod media;
}
mod state {
    pub mod filter;
    pub mod media;
    pub mod nav;
    pub mod reveal;
    pub mod validate;
}

use components::footer::Footer;
use pages::{contact::Contact, home::Home, media::Media};
use state::nav;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/media")]
    Media,
    #[at("/contact")]
    Contact,
}

const NAV_LINKS: &[(Route, &str, &str)] = &[
    (Route::Home, "/", "Home"),
    (Route::Media, "/media", "Media"),
    (Route::Contact, "/contact", "Contact"),
];

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Media => {
            info!("Rendering Media page");
            html! { <Media /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > nav::SCROLLED_OFFSET);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="top-nav">
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {config::SITE_NAME}
                    </Link<Route>>

                    <button class="menu-toggle" aria-label="Toggle navigation" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>

                    <ul class={classes!("nav-list", (*menu_open).then(|| "open"))}>
                        {
                            for NAV_LINKS.iter().map(|(route, href, label)| {
                                let active = nav::is_active_link(&current_path, href);
                                html! {
                                    <li onclick={close_menu.clone()}>
                                        <Link<Route>
                                            to={route.clone()}
                                            classes={classes!("nav-link", active.then(|| "active"))}
                                        >
                                            {*label}
                                        </Link<Route>>
                                    </li>
                                }
                            })
                        }
                    </ul>
                </div>
            </nav>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.25s ease, box-shadow 0.25s ease;
                }
                .site-header.scrolled {
                    background: rgba(16, 16, 16, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    text-decoration: none;
                }
                .menu-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }
                .menu-toggle span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }
                .nav-list {
                    display: flex;
                    align-items: center;
                    gap: 1.6rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-link.active {
                    color: #ff6b35;
                }
                @media (max-width: 720px) {
                    .menu-toggle {
                        display: flex;
                    }
                    .nav-list {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 0;
                        background: rgba(16, 16, 16, 0.98);
                        display: none;
                    }
                    .nav-list.open {
                        display: flex;
                    }
                    .nav-list li {
                        width: 100%;
                    }
                    .nav-list .nav-link {
                        display: block;
                        padding: 1rem 2rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
