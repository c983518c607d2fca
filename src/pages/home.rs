use yew::prelude::*;
use yew_hooks::use_effect_once;
use yew_router::prelude::*;

use crate::config;
use crate::observe::{RevealMode, RevealObserver};
use crate::Route;

struct Program {
    name: &'static str,
    blurb: &'static str,
}

const PROGRAMS: &[Program] = &[
    Program {
        name: "Foundations",
        blurb: "Eight weeks of coached barbell basics for first-timers. Small groups, no ego, every lift taught from the ground up.",
    },
    Program {
        name: "Strength Club",
        blurb: "Programmed squat, press and pull cycles for members who want numbers on the bar. Test weeks every quarter.",
    },
    Program {
        name: "Conditioning",
        blurb: "Forty-five minutes of intervals, sleds and airbikes. Scaled to whoever walks in the door.",
    },
    Program {
        name: "Open Floor",
        blurb: "Run your own session on our platforms and racks, with a coach around when you want an extra pair of eyes.",
    },
];

const MERCH: &[(&str, &str, &str)] = &[
    ("ADR club tee", "/assets/merch/club-tee.jpg", "$28"),
    ("Heavyweight hoodie", "/assets/merch/hoodie.jpg", "$64"),
    ("Training journal", "/assets/merch/journal.jpg", "$18"),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_once(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        let document = web_sys::window().and_then(|w| w.document());
        let sections = document
            .as_ref()
            .and_then(|d| RevealObserver::install(d, ".reveal", RevealMode::Single));
        let cards = document
            .as_ref()
            .and_then(|d| RevealObserver::install(d, ".merch-card, .grid .card", RevealMode::Staggered));
        move || {
            if let Some(observer) = sections {
                observer.disconnect();
            }
            if let Some(observer) = cards {
                observer.disconnect();
            }
        }
    });

    html! {
        <div class="home-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{config::SITE_NAME}</h1>
                    <p class="hero-subtitle">{config::SITE_TAGLINE}</p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Contact} classes="forward-link">
                            <button class="hero-cta">{"Book a free intro"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Media} classes="hero-secondary">
                            {"See the gym first"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="programs-section reveal">
                <h2>{"Programs"}</h2>
                <p class="section-lead">{"Four ways in, whatever your starting point."}</p>
                <div class="grid">
                    {
                        for PROGRAMS.iter().map(|program| html! {
                            <div class="card">
                                <h3>{program.name}</h3>
                                <p>{program.blurb}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="merch-section reveal">
                <h2>{"Merch"}</h2>
                <p class="section-lead">{"Wear the club colors. Printed in small runs, gone when they're gone."}</p>
                <div class="merch-strip">
                    {
                        for MERCH.iter().map(|(name, image, price)| html! {
                            <div class="merch-card">
                                <img src={*image} alt={*name} loading="lazy" />
                                <div class="merch-meta">
                                    <span>{*name}</span>
                                    <span class="merch-price">{*price}</span>
                                </div>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="closing-cta reveal">
                <h2>{"Train with us"}</h2>
                <p>{"First session is on the house. Tell us where you're at and we'll take it from there."}</p>
                <Link<Route> to={Route::Contact} classes="forward-link">
                    <button class="hero-cta">{"Get in touch"}</button>
                </Link<Route>>
            </section>

            <style>
                {r#"
                .home-page {
                    background: #141414;
                    color: #fff;
                }
                .hero {
                    min-height: 82vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background:
                        linear-gradient(rgba(20, 20, 20, 0.72), rgba(20, 20, 20, 0.94)),
                        url('/assets/hero-floor.jpg') center / cover no-repeat;
                }
                .hero h1 {
                    font-size: 4rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                }
                .hero-subtitle {
                    margin: 1rem auto 2.2rem;
                    max-width: 520px;
                    color: #ccc;
                    font-size: 1.15rem;
                }
                .hero-cta-group {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.4rem;
                }
                .hero-cta {
                    padding: 0.9rem 2.2rem;
                    border: none;
                    border-radius: 6px;
                    background: #ff6b35;
                    color: #141414;
                    font-size: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-2px);
                }
                .hero-secondary {
                    color: #ccc;
                    text-decoration: underline;
                }
                .programs-section,
                .merch-section,
                .closing-cta {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4.5rem 2rem;
                }
                .programs-section h2,
                .merch-section h2,
                .closing-cta h2 {
                    font-size: 2.2rem;
                    margin-bottom: 0.5rem;
                }
                .section-lead {
                    color: #999;
                    margin-bottom: 2rem;
                }
                .grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                    gap: 1.2rem;
                }
                .card {
                    background: #1d1d1d;
                    border: 1px solid rgba(255, 107, 53, 0.15);
                    border-radius: 10px;
                    padding: 1.6rem;
                }
                .card h3 {
                    margin-bottom: 0.6rem;
                    color: #ff6b35;
                }
                .card p {
                    color: #bbb;
                    line-height: 1.5;
                }
                .merch-strip {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.2rem;
                }
                .merch-card {
                    background: #1d1d1d;
                    border-radius: 10px;
                    overflow: hidden;
                }
                .merch-card img {
                    display: block;
                    width: 100%;
                    aspect-ratio: 1;
                    object-fit: cover;
                }
                .merch-meta {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.9rem 1rem;
                    color: #ccc;
                }
                .merch-price {
                    color: #ff6b35;
                    font-weight: 600;
                }
                .closing-cta {
                    text-align: center;
                }
                .closing-cta p {
                    color: #999;
                    margin-bottom: 1.6rem;
                }
                @media (max-width: 600px) {
                    .hero h1 {
                        font-size: 2.6rem;
                    }
                    .hero-cta-group {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
