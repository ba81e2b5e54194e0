use log::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::components::theme_customizer::ThemeCustomizer;
use crate::content::profile::{DISPLAY_NAME, EMAIL, NAV_LINKS};
use crate::state::scroll::header_is_compact;
use crate::theme::{use_theme, ThemeAction};
use crate::toast::{use_toast, Toaster};

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

fn copy_email(toaster: Toaster) {
    spawn_local(async move {
        match copy_to_clipboard(EMAIL).await {
            Ok(()) => toaster.success("Email copied to clipboard", EMAIL),
            Err(e) => {
                warn!("Clipboard write failed: {:?}", e);
                toaster.error("Couldn't copy email", format!("Reach me at {}", EMAIL));
            }
        }
    });
}

#[function_component(Header)]
pub fn header() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);
    let theme = use_theme();
    let toaster = use_toast();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_mode = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::ToggleMode))
    };

    let contact_me = {
        let toaster = toaster.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            copy_email(toaster.clone());
        })
    };

    let nav_links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                html! {
                    <a href={link.href} class={class} onclick={close_menu.clone()}>{ link.label }</a>
                }
            })
            .collect()
    };

    let mode_icon = if theme.is_dark() { "☀" } else { "☾" };

    html! {
        <header class={classes!("site-header", header_is_compact(scroll_y).then_some("compact"))}>
            <div class="container header-row">
                <a href="#home" class="logo">
                    { DISPLAY_NAME }<span class="text-primary">{"."}</span>
                </a>

                <nav class="desktop-nav" aria-label="Primary">
                    { nav_links("nav-link") }
                </nav>

                <div class="header-actions">
                    <LanguageSwitcher />
                    <ThemeCustomizer />
                    <button class="btn btn-ghost btn-icon" onclick={toggle_mode.clone()} aria-label="Toggle dark mode">
                        { mode_icon }
                    </button>
                    <button class="btn btn-primary contact-me" onclick={contact_me.clone()}>{"Contact Me"}</button>
                    <button
                        class="btn btn-ghost btn-icon burger"
                        onclick={toggle_menu}
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={menu_open.to_string()}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            if *menu_open {
                <nav class="mobile-nav" aria-label="Mobile">
                    { nav_links("mobile-nav-link") }
                    <button class="btn btn-primary" onclick={contact_me}>{"Contact Me"}</button>
                </nav>
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    transition: padding 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.compact {
                    padding: 0.6rem 0;
                    background: var(--surface-glass);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 0 var(--border);
                }
                .header-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .logo {
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: var(--text);
                    text-decoration: none;
                }
                .desktop-nav {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link, .mobile-nav-link {
                    color: var(--text-muted);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover, .mobile-nav-link:hover {
                    color: var(--primary);
                }
                .header-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .burger {
                    display: none;
                }
                .mobile-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem 1.5rem;
                    background: var(--surface);
                    border-top: 1px solid var(--border);
                }
                @media (max-width: 900px) {
                    .desktop-nav, .contact-me {
                        display: none;
                    }
                    .burger {
                        display: inline-flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
