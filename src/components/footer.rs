use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{config::SITE_NAME}</span>
                    <p>{config::SITE_TAGLINE}</p>
                </div>
                <nav class="footer-links">
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Media}>{"Media"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener">{"Instagram"}</a>
                </nav>
                <span class="footer-year">
                    {format!("© {} {}", year, config::SITE_NAME)}
                </span>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #101010;
                    border-top: 1px solid rgba(255, 107, 53, 0.15);
                    padding: 2.5rem 2rem;
                    color: #999;
                }
                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .footer-logo {
                    font-weight: 700;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    color: #fff;
                }
                .footer-brand p {
                    margin: 0.3rem 0 0;
                    font-size: 0.9rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1.2rem;
                }
                .footer-links a {
                    color: #999;
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: #ff6b35;
                }
                .footer-year {
                    font-size: 0.85rem;
                }
                "#}
            </style>
        </footer>
    }
}
