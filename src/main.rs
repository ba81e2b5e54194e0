use gloo_timers::callback::Timeout;
use log::{info, warn, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod storage;
mod theme;
mod toast;
mod content {
    pub mod models;
    pub mod experience;
    pub mod skills;
    pub mod education;
    pub mod projects;
    pub mod profile;
}
mod state {
    pub mod filter;
    pub mod expand;
    pub mod gallery;
    pub mod typewriter;
    pub mod scroll;
}
mod hooks {
    pub mod reveal;
}
mod components {
    pub mod reveal;
    pub mod header;
    pub mod language_switcher;
    pub mod theme_customizer;
    pub mod hero;
    pub mod about;
    pub mod skill_chart;
    pub mod experience;
    pub mod skills;
    pub mod education;
    pub mod projects;
    pub mod project_dialog;
    pub mod contact_section;
    pub mod footer;
    pub mod effects;
    pub mod skeleton;
}

use components::{
    about::About,
    contact_section::ContactSection,
    education::Education,
    effects::{CustomCursor, ParallaxBackground, ScrollProgress},
    experience::Experience,
    footer::Footer,
    header::Header,
    hero::Hero,
    projects::Projects,
    skeleton::{SectionSkeleton, SECTION_PLACEHOLDERS, SKELETON_STYLES},
    skills::Skills,
};
use state::scroll::anchor_target;
use theme::ThemeProvider;
use toast::ToastProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

/// Smooth-scrolls to the element a clicked `#id` link points at. Returns
/// false when the click is not an in-page link with a live target.
fn scroll_to_anchor(document: &Document, event: &MouseEvent) -> bool {
    let Some(anchor) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a[href^='#']").ok().flatten())
    else {
        return false;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return false;
    };
    let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id)) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[function_component]
fn Home() -> Html {
    let loading = use_state(|| true);

    // Simulated initial load
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::LOADING_DELAY_MS, move || loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    // In-page links scroll smoothly instead of jumping
    use_effect_with_deps(
        move |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                let doc = document.clone();
                let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    if scroll_to_anchor(&doc, &e) {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if document
                    .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("Could not attach anchor click listener");
                }
                (document, click_callback)
            });

            move || {
                if let Some((document, click_callback)) = listener {
                    if document
                        .remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("Could not detach anchor click listener");
                    }
                }
            }
        },
        (),
    );

    html! {
        <>
            <a href="#main" class="skip-link">{"Skip to content"}</a>
            <ScrollProgress />
            <ParallaxBackground />
            <CustomCursor />
            <Header />
            <main id="main" tabindex="-1">
                <Hero />
                if *loading {
                    { for SECTION_PLACEHOLDERS.iter().map(|(id, kind)| html! {
                        <SectionSkeleton key={*id} id={*id} kind={*kind} />
                    }) }
                    <style>{ SKELETON_STYLES }</style>
                } else {
                    <About />
                    <Experience />
                    <Skills />
                    <Education />
                    <Projects />
                    <ContactSection />
                }
            </main>
            <Footer />
        </>
    }
}

#[function_component]
fn NotFound() -> Html {
    html! {
        <main id="main" class="not-found">
            <h1>{"404"}</h1>
            <p class="muted">{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Return to Home"}
            </Link<Route>>
        </main>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
                <style>{ GLOBAL_STYLES }</style>
            </ToastProvider>
        </ThemeProvider>
    }
}

const GLOBAL_STYLES: &str = r#"
:root {
    --primary: #3b82f6;
    --accent: #8b5cf6;
    --primary-soft: color-mix(in srgb, var(--primary) 12%, transparent);
    --accent-soft: color-mix(in srgb, var(--accent) 12%, transparent);
}
:root.dark {
    --bg: #0b1120;
    --surface: #111827;
    --surface-muted: #1f2937;
    --surface-glass: rgba(17, 24, 39, 0.75);
    --text: #f3f4f6;
    --text-muted: #9ca3af;
    --border: #1f2937;
    color-scheme: dark;
}
:root.light {
    --bg: #ffffff;
    --surface: #ffffff;
    --surface-muted: #f1f5f9;
    --surface-glass: rgba(255, 255, 255, 0.8);
    --text: #0f172a;
    --text-muted: #64748b;
    --border: #e2e8f0;
    color-scheme: light;
}
* {
    box-sizing: border-box;
}
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    transition: background 0.3s ease, color 0.3s ease;
}
a {
    color: var(--primary);
}
section[id] {
    scroll-margin-top: 5rem;
}
.container {
    width: 100%;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
}
.section {
    position: relative;
    padding: 5rem 0;
}
.section-muted {
    background: var(--surface-muted);
    background: color-mix(in srgb, var(--surface-muted) 50%, transparent);
}
.section-gradient {
    background: linear-gradient(to top, var(--surface-muted), var(--bg));
}
.section-heading {
    text-align: center;
    margin-bottom: 3rem;
}
.section-heading h2 {
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    margin: 1rem 0 0.75rem;
}
.section-subtitle, .muted {
    color: var(--text-muted);
}
.section-subtitle {
    max-width: 42rem;
    margin: 0 auto;
}
.text-primary { color: var(--primary); }
.text-accent { color: var(--accent); }
.lead { font-size: 1.125rem; }
.empty { text-align: center; }
.card {
    padding: 1.5rem;
    border-radius: 1rem;
    border: 1px solid var(--border);
    background: var(--surface);
}
.glass {
    background: var(--surface-glass);
    backdrop-filter: blur(12px);
}
.badge {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    font-size: 0.8rem;
    font-weight: 500;
}
.badge-outline { border: 1px solid var(--border); }
.badge-primary { background: var(--primary); color: #fff; }
.badge-accent { background: var(--accent-soft); color: var(--accent); }
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.55rem 1rem;
    border-radius: 0.5rem;
    border: 1px solid transparent;
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    text-decoration: none;
    transition: background 0.2s ease, border-color 0.2s ease, opacity 0.2s ease;
}
.btn:disabled { opacity: 0.6; cursor: progress; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-outline { background: transparent; border-color: var(--border); color: var(--text); }
.btn-outline:hover { border-color: var(--primary); }
.btn-ghost { background: transparent; color: var(--text); }
.btn-icon { padding: 0.5rem; width: 2.5rem; height: 2.5rem; }
.btn-sm { padding: 0.35rem 0.7rem; font-size: 0.85rem; }
.btn-lg { padding: 0.75rem 1.5rem; font-size: 1.05rem; }
.tabs {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-bottom: 2.5rem;
}
.tab {
    padding: 0.5rem 1rem;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: transparent;
    color: var(--text);
    font: inherit;
    cursor: pointer;
}
.tab-sm { font-size: 0.85rem; padding: 0.35rem 0.8rem; }
.tab.active { background: var(--primary); border-color: var(--primary); color: #fff; }
.tab-count {
    margin-left: 0.5rem;
    font-size: 0.75rem;
    opacity: 0.75;
}
.skip-link {
    position: absolute;
    left: 1rem;
    top: -3rem;
    z-index: 200;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    background: var(--primary);
    color: #fff;
}
.skip-link:focus { top: 1rem; }
.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    height: 3px;
    z-index: 60;
    background: linear-gradient(90deg, var(--primary), var(--accent));
    transition: width 0.1s linear;
}
.parallax {
    position: fixed;
    inset: 0;
    z-index: -10;
    overflow: hidden;
    pointer-events: none;
}
.parallax-grid, .parallax-shapes {
    position: absolute;
    inset: 0;
}
.blob {
    position: absolute;
    border-radius: 50%;
    filter: blur(64px);
    opacity: 0.2;
}
.blob-a { width: 600px; height: 600px; top: 10%; right: -15%; background: linear-gradient(135deg, var(--accent), transparent); }
.blob-b { width: 500px; height: 500px; bottom: 5%; left: -10%; background: linear-gradient(45deg, var(--primary), transparent); }
.blob-c { width: 300px; height: 300px; top: 50%; left: 40%; background: linear-gradient(90deg, var(--accent), var(--primary)); }
.cursor-dot {
    position: fixed;
    top: -4px;
    left: -4px;
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--accent);
    pointer-events: none;
    z-index: 300;
    mix-blend-mode: difference;
}
.theme-customizer { position: relative; }
.theme-popover {
    position: absolute;
    right: 0;
    top: 3rem;
    padding: 1rem;
    border-radius: 0.75rem;
    border: 1px solid var(--border);
    background: var(--surface);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
}
.theme-popover-title { margin: 0 0 0.75rem; font-weight: 500; }
.theme-swatches { display: flex; gap: 0.5rem; }
.theme-swatch {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    border: 2px solid transparent;
    cursor: pointer;
}
.theme-swatch.selected { border-color: var(--text); }
.not-found {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}
.not-found h1 { font-size: 4rem; margin: 0; }
@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    * { transition-duration: 0.01ms !important; animation-duration: 0.01ms !important; }
}
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
