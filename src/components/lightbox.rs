use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::state::media::{LightboxMedia, MediaKind};

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub media: LightboxMedia,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    // Escape closes for as long as the overlay is mounted; the listener is
    // removed in the cleanup when the overlay unmounts.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let backdrop_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    // Clicks on the media content stay inside the overlay.
    let keep_open = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let label = if props.media.caption.is_empty() {
        "ADR media".to_string()
    } else {
        props.media.caption.clone()
    };

    let media = match &props.media.kind {
        MediaKind::InlineVideo(src) => html! {
            <video controls=true autoplay=true>
                <source src={src.clone()} type="video/mp4" />
                {"Your browser does not support the video tag."}
            </video>
        },
        MediaKind::EmbeddedVideo(src) => html! {
            <iframe src={src.clone()} allowfullscreen=true title={label.clone()}></iframe>
        },
        MediaKind::Image(src) => html! {
            <img src={src.clone()} alt={label.clone()} />
        },
    };

    html! {
        <div class="lightbox" onclick={backdrop_close}>
            <div class="lightbox-inner" onclick={keep_open}>
                <button class="lightbox-close" aria-label="Close" onclick={close}>{"×"}</button>
                <div class="lightbox-media">
                    {media}
                </div>
                <div class="lightbox-caption">{&props.media.caption}</div>
            </div>
            <style>
                {r#"
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(10, 10, 10, 0.92);
                    padding: 2rem;
                }
                .lightbox-inner {
                    position: relative;
                    max-width: min(960px, 92vw);
                    width: 100%;
                }
                .lightbox-close {
                    position: absolute;
                    top: -2.6rem;
                    right: 0;
                    width: 2.2rem;
                    height: 2.2rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.12);
                    color: #fff;
                    font-size: 1.3rem;
                    line-height: 1;
                    cursor: pointer;
                }
                .lightbox-close:hover {
                    background: rgba(255, 255, 255, 0.25);
                }
                .lightbox-media img,
                .lightbox-media video {
                    display: block;
                    width: 100%;
                    max-height: 78vh;
                    object-fit: contain;
                    border-radius: 8px;
                }
                .lightbox-media iframe {
                    display: block;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border: none;
                    border-radius: 8px;
                }
                .lightbox-caption {
                    margin-top: 0.8rem;
                    text-align: center;
                    color: #bbb;
                    font-size: 0.95rem;
                    min-height: 1.2em;
                }
                "#}
            </style>
        </div>
    }
}
