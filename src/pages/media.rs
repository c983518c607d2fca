use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::lightbox::Lightbox;
use crate::observe::{RevealMode, RevealObserver};
use crate::state::filter;
use crate::state::media::{self, LightboxState};

struct GalleryEntry {
    /// Filter type this item belongs to.
    item_type: &'static str,
    /// Grid thumbnail, and the enlarged image when `full` is absent.
    thumb: &'static str,
    alt: &'static str,
    /// Enlarged image override.
    full: Option<&'static str>,
    /// Video source; file references play inline, anything else is embedded.
    video: Option<&'static str>,
    caption: Option<&'static str>,
}

const GALLERY: &[GalleryEntry] = &[
    GalleryEntry {
        item_type: "photos",
        thumb: "/assets/media/open-floor.jpg",
        alt: "The open training floor",
        full: None,
        video: None,
        caption: Some("The open floor, ready for the 6am crew"),
    },
    GalleryEntry {
        item_type: "photos",
        thumb: "/assets/media/deadlift-thumb.jpg",
        alt: "Member locking out a deadlift",
        full: Some("/assets/media/deadlift-full.jpg"),
        video: None,
        caption: Some("PR day on the platform"),
    },
    GalleryEntry {
        item_type: "videos",
        thumb: "/assets/media/conditioning-poster.jpg",
        alt: "Saturday conditioning class",
        full: None,
        video: Some("/assets/media/conditioning-class.mp4"),
        caption: Some("Inside a Saturday conditioning class"),
    },
    GalleryEntry {
        item_type: "photos",
        thumb: "/assets/media/mobility.jpg",
        alt: "Coach leading a mobility session",
        full: None,
        video: None,
        caption: None,
    },
    GalleryEntry {
        item_type: "videos",
        thumb: "/assets/media/gym-tour-poster.jpg",
        alt: "Video tour of the gym",
        full: None,
        video: Some("https://www.youtube.com/embed/5qap5aO4i9A"),
        caption: Some("Take the full tour"),
    },
    GalleryEntry {
        item_type: "photos",
        thumb: "/assets/media/community-bbq.jpg",
        alt: "Members at the summer barbecue",
        full: None,
        video: None,
        caption: Some("Summer barbecue on the back lot"),
    },
    GalleryEntry {
        item_type: "photos",
        thumb: "/assets/media/rack-row.jpg",
        alt: "Row of squat racks at dawn",
        full: None,
        video: None,
        caption: None,
    },
    GalleryEntry {
        item_type: "videos",
        thumb: "/assets/media/technique-poster.jpg",
        alt: "Technique breakdown session",
        full: None,
        video: Some("/assets/media/technique-breakdown.webm"),
        caption: Some("Snatch technique breakdown with Coach Ana"),
    },
];

#[function_component(Media)]
pub fn media() -> Html {
    let active_filter = use_state(|| filter::FILTER_ALL.to_string());
    let lightbox = use_state(LightboxState::default);

    use_effect_once(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        let document = web_sys::window().and_then(|w| w.document());
        let sections = document
            .as_ref()
            .and_then(|d| RevealObserver::install(d, ".reveal", RevealMode::Single));
        let grid = document
            .as_ref()
            .and_then(|d| RevealObserver::install(d, ".gallery-item", RevealMode::Staggered));
        move || {
            if let Some(observer) = sections {
                observer.disconnect();
            }
            if let Some(observer) = grid {
                observer.disconnect();
            }
        }
    });

    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: ()| {
            let next = (*lightbox).close();
            lightbox.set(next);
        })
    };

    html! {
        <div class="media-page">
            <section class="media-hero reveal">
                <h1>{"Media"}</h1>
                <p>{"Training days, community events and what it actually looks like inside ADR."}</p>
            </section>

            <section class="media-gallery">
                <div class="filter-bar" role="group" aria-label="Filter media">
                    {
                        for filter::FILTERS.iter().map(|(value, label)| {
                            let onclick = {
                                let active_filter = active_filter.clone();
                                let value = *value;
                                Callback::from(move |_: MouseEvent| {
                                    active_filter.set(value.to_string());
                                })
                            };
                            html! {
                                <button
                                    class={classes!("filter-button", (*active_filter == *value).then(|| "active"))}
                                    onclick={onclick}
                                >
                                    {*label}
                                </button>
                            }
                        })
                    }
                </div>

                <div class="gallery-grid">
                    {
                        for GALLERY.iter().map(|entry| {
                            let visible = filter::matches(&active_filter, entry.item_type);

                            let open = {
                                let lightbox = lightbox.clone();
                                Callback::from(move |_: ()| {
                                    let resolved = media::resolve(
                                        Some(entry.full.unwrap_or(entry.thumb)),
                                        entry.video,
                                        entry.caption,
                                        Some(entry.alt),
                                    );
                                    if let Some(resolved) = resolved {
                                        let next = (*lightbox).open(resolved);
                                        lightbox.set(next);
                                    }
                                })
                            };
                            let onclick = {
                                let open = open.clone();
                                Callback::from(move |_: MouseEvent| open.emit(()))
                            };
                            let onkeydown = {
                                let open = open.clone();
                                Callback::from(move |e: KeyboardEvent| {
                                    if e.key() == "Enter" || e.key() == " " {
                                        e.prevent_default();
                                        open.emit(());
                                    }
                                })
                            };

                            html! {
                                <figure
                                    class="gallery-item"
                                    tabindex="0"
                                    role="button"
                                    style={if visible { "display:block" } else { "display:none" }}
                                    onclick={onclick}
                                    onkeydown={onkeydown}
                                >
                                    <img src={entry.thumb} alt={entry.alt} loading="lazy" />
                                    {
                                        if entry.video.is_some() {
                                            html! { <span class="play-badge">{"▶"}</span> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </figure>
                            }
                        })
                    }
                </div>
            </section>

            {
                if let Some(current) = (*lightbox).current() {
                    html! { <Lightbox media={current.clone()} on_close={on_close} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .media-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #141414;
                    color: #fff;
                }
                .media-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }
                .media-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #ff6b35);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .media-hero p {
                    color: #999;
                    max-width: 540px;
                    margin: 0 auto;
                }
                .media-gallery {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem 5rem;
                }
                .filter-bar {
                    display: flex;
                    justify-content: center;
                    gap: 0.8rem;
                    margin-bottom: 2.5rem;
                }
                .filter-button {
                    padding: 0.5rem 1.4rem;
                    border: 1px solid rgba(255, 107, 53, 0.35);
                    border-radius: 999px;
                    background: transparent;
                    color: #ccc;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .filter-button:hover {
                    border-color: #ff6b35;
                    color: #fff;
                }
                .filter-button.active {
                    background: #ff6b35;
                    border-color: #ff6b35;
                    color: #141414;
                    font-weight: 600;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 1.2rem;
                }
                .gallery-item {
                    position: relative;
                    margin: 0;
                    border-radius: 10px;
                    overflow: hidden;
                    cursor: pointer;
                    outline-offset: 3px;
                }
                .gallery-item img {
                    display: block;
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .gallery-item:hover img,
                .gallery-item:focus img {
                    transform: scale(1.04);
                }
                .play-badge {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.4rem;
                    color: rgba(255, 255, 255, 0.9);
                    background: rgba(0, 0, 0, 0.25);
                    pointer-events: none;
                }
                @media (max-width: 600px) {
                    .media-hero h1 {
                        font-size: 2.2rem;
                    }
                    .filter-bar {
                        flex-wrap: wrap;
                    }
                }
                "#}
            </style>
        </div>
    }
}
