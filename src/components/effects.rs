use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::state::scroll::{parallax_transform, scroll_progress};
use crate::theme::use_theme;

const GRID_PATTERN: &str = "url(\"data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E%3Cg fill='%239C92AC' fill-opacity='0.4'%3E%3Cpath d='M36 34v-4h-2v4h-4v2h4v4h2v-4h4v-2h-4zm0-30V0h-2v4h-4v2h4v4h2V6h4V4h-4zM6 34v-4H4v4H0v2h4v4h2v-4h4v-2H6zM6 4V0H4v4H0v2h4v4h2V6h4V4H6z'/%3E%3C/g%3E%3C/g%3E%3C/svg%3E\")";

/// Page height and viewport height, or zeros before the document exists.
fn page_metrics() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (scroll_height, viewport)
}

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (scroll_height, viewport) = page_metrics();
    let percent = scroll_progress(scroll_y, scroll_height, viewport);

    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-label="Page scroll progress"
            aria-valuenow={percent.to_string()}
            aria-valuemin="0"
            aria-valuemax="100"
            style={format!("width: {}%;", percent)}
        />
    }
}

/// Fixed background layer that drifts and turns slowly as the page scrolls.
#[function_component(ParallaxBackground)]
pub fn parallax_background() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let theme = use_theme();
    let grid_opacity = if theme.is_dark() { 0.05 } else { 0.1 };

    html! {
        <div class="parallax" aria-hidden="true">
            <div class="parallax-grid" style={format!("background-image: {}; opacity: {};", GRID_PATTERN, grid_opacity)} />
            <div class="parallax-shapes" style={format!("transform: {};", parallax_transform(scroll_y))}>
                <div class="blob blob-a" />
                <div class="blob blob-b" />
                <div class="blob blob-c" />
            </div>
        </div>
    }
}

/// Dot that trails the pointer. Hidden until the first mouse move so touch
/// devices never see it.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let position = use_state_eq(|| None::<(i32, i32)>);

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set(Some((e.client_x(), e.client_y())));
        });
    }

    match *position {
        Some((x, y)) => html! {
            <div
                class="cursor-dot"
                aria-hidden="true"
                style={format!("transform: translate({}px, {}px);", x, y)}
            />
        },
        None => html! {},
    }
}
