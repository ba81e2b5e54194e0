use chrono::Datelike;
use yew::prelude::*;

use crate::content::profile::{DISPLAY_NAME, FOOTER_BLURB, FULL_NAME, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-top">
                    <div>
                        <div class="footer-name gradient-text">{ DISPLAY_NAME }</div>
                        <p class="muted">{ FOOTER_BLURB }</p>
                    </div>
                    <div class="social-row">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a
                                href={link.href}
                                class="social-link"
                                aria-label={link.label}
                                target={(!link.href.starts_with("mailto:")).then_some("_blank")}
                                rel="noopener noreferrer"
                            >
                                { link.icon }
                            </a>
                        }) }
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{ format!("© {} {}. All rights reserved.", year, FULL_NAME) }</span>
                    <span>{"</> Designed & Built with precision"}</span>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0;
                    border-top: 1px solid var(--border);
                }
                .footer-top, .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .footer-name {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .footer-bottom {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--border);
                    font-size: 0.875rem;
                    color: var(--text-muted);
                }
                .social-row {
                    display: flex;
                    gap: 1rem;
                }
                .social-link {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--surface-muted);
                    color: var(--text);
                    text-decoration: none;
                    font-weight: 600;
                    transition: background 0.2s ease;
                }
                .social-link:hover {
                    background: var(--primary-soft);
                }
                "#}
            </style>
        </footer>
    }
}
