use std::collections::BTreeSet;

use web_sys::{window, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::models::{DetailSection, Project};
use crate::state::gallery::GalleryCursor;

#[derive(Properties, PartialEq)]
pub struct ProjectDialogProps {
    pub project: &'static Project,
    pub on_close: Callback<()>,
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}

fn render_section(section: &DetailSection) -> Html {
    html! {
        <section class="detail-section">
            <h4>{ section.heading }</h4>
            { for section.paragraphs.iter().map(|p| html! { <p>{ *p }</p> }) }
            if !section.bullets.is_empty() {
                <ul>
                    { for section.bullets.iter().map(|b| html! { <li>{ *b }</li> }) }
                </ul>
            }
        </section>
    }
}

/// Modal with the project's image gallery and write-up. Mounted only while
/// open, so the gallery always starts on the first image.
#[function_component(ProjectDialog)]
pub fn project_dialog(props: &ProjectDialogProps) -> Html {
    let project = props.project;
    let cursor = use_state(|| GalleryCursor::new(project.gallery.len()));
    let failed = use_state(BTreeSet::<usize>::new);

    use_effect_with_deps(
        |_| {
            set_body_scroll_locked(true);
            || set_body_scroll_locked(false)
        },
        (),
    );

    {
        let cursor = cursor.clone();
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => on_close.emit(()),
            "ArrowRight" => cursor.set(cursor.next()),
            "ArrowLeft" => cursor.set(cursor.previous()),
            _ => {}
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let next = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.next()))
    };
    let previous = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.previous()))
    };

    let image = match cursor.current(project.gallery) {
        Some(src) if failed.contains(&cursor.index()) => html! {
            <div class="gallery-placeholder">{ format!("Image unavailable: {}", src) }</div>
        },
        Some(src) => {
            let onerror = {
                let failed = failed.clone();
                let index = cursor.index();
                Callback::from(move |_: Event| {
                    let mut next = (*failed).clone();
                    next.insert(index);
                    failed.set(next);
                })
            };
            html! {
                <img
                    class="gallery-image"
                    src={*src}
                    alt={format!("{} screenshot {}", project.title, cursor.position_label())}
                    {onerror}
                />
            }
        }
        None => html! {},
    };

    html! {
        <div class="dialog-backdrop" onclick={close.clone()}>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-dialog-title"
                onclick={keep_open}
            >
                <header class="dialog-header">
                    <div>
                        <h3 id="project-dialog-title">{ project.title }</h3>
                        <p class="muted">{"Detailed project overview"}</p>
                    </div>
                    <button class="btn btn-ghost btn-icon" onclick={close} aria-label="Close">{"✕"}</button>
                </header>

                if !cursor.is_empty() {
                    <div class="gallery">
                        { image }
                        if cursor.can_navigate() {
                            <button class="gallery-nav prev" onclick={previous} aria-label="Previous image">{"‹"}</button>
                            <button class="gallery-nav next" onclick={next} aria-label="Next image">{"›"}</button>
                            <span class="gallery-position">{ cursor.position_label() }</span>
                        }
                    </div>
                    if cursor.can_navigate() {
                        <div class="gallery-dots">
                            { for (0..cursor.len()).map(|i| {
                                let jump = {
                                    let cursor = cursor.clone();
                                    Callback::from(move |_: MouseEvent| cursor.set(cursor.jump_to(i)))
                                };
                                html! {
                                    <button
                                        class={classes!("gallery-dot", (i == cursor.index()).then_some("active"))}
                                        onclick={jump}
                                        aria-label={format!("Show image {}", i + 1)}
                                    />
                                }
                            }) }
                        </div>
                    }
                }

                <div class="dialog-body">
                    <p class="lead">{ project.description }</p>
                    { for project.details.unwrap_or_default().iter().map(render_section) }
                </div>
            </div>

            <style>
                {r#"
                .dialog-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                }
                .dialog {
                    width: 100%;
                    max-width: 48rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    border-radius: 1rem;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    padding: 1.5rem;
                }
                .dialog-header {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .gallery {
                    position: relative;
                    margin: 1rem 0;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    background: var(--surface-muted);
                    aspect-ratio: 16 / 9;
                }
                .gallery-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .gallery-placeholder {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    color: var(--text-muted);
                    font-size: 0.9rem;
                }
                .gallery-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(0, 0, 0, 0.5);
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .gallery-nav.prev {
                    left: 0.75rem;
                }
                .gallery-nav.next {
                    right: 0.75rem;
                }
                .gallery-position {
                    position: absolute;
                    bottom: 0.75rem;
                    right: 0.75rem;
                    padding: 0.2rem 0.6rem;
                    border-radius: 999px;
                    background: rgba(0, 0, 0, 0.5);
                    color: #fff;
                    font-size: 0.8rem;
                }
                .gallery-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .gallery-dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    border-radius: 50%;
                    border: none;
                    background: var(--border);
                    cursor: pointer;
                }
                .gallery-dot.active {
                    background: var(--primary);
                }
                .detail-section h4 {
                    margin-bottom: 0.5rem;
                    color: var(--primary);
                }
                "#}
            </style>
        </div>
    }
}
