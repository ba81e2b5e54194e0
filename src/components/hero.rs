use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::reveal::{Motion, Reveal};
use crate::content::profile::{HERO_NAMES, HERO_SPECIALTIES, HERO_STACK, ROLE, TAGLINE};
use crate::hooks::reveal::RevealDirection;
use crate::state::typewriter::Typewriter;

const TYPE_MS: u32 = 50;
const DELETE_MS: u32 = 50;

/// Cycles through the hero names. Each frame schedules exactly one timer,
/// which is dropped when the next frame starts or the hero unmounts.
#[hook]
fn use_typewriter(phrases: &'static [(&'static str, u32)]) -> String {
    let writer = use_mut_ref(|| Typewriter::new(phrases, TYPE_MS, DELETE_MS));
    // (frame number, delay before the next step)
    let frame = use_state(|| (0u64, 0u32));

    {
        let writer = writer.clone();
        let frame_handle = frame.clone();
        use_effect_with_deps(
            move |&(count, delay)| {
                let timeout = Timeout::new(delay, move || {
                    let next = writer.borrow_mut().step();
                    frame_handle.set((count + 1, next));
                });
                move || drop(timeout)
            },
            *frame,
        );
    }

    let text = writer.borrow().text();
    text
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let name = use_typewriter(HERO_NAMES);

    html! {
        <section id="home" class="hero">
            <div class="glow glow-right" aria-hidden="true" />
            <div class="glow glow-left" aria-hidden="true" />

            <Reveal class="container hero-grid" threshold={0.0}>
                <div class="hero-copy">
                    <Motion>
                        <span class="badge badge-accent">{ ROLE }</span>
                        <h1 class="hero-title">
                            <span class="gradient-text">{ name }</span>
                            <span class="caret" aria-hidden="true">{"|"}</span>
                        </h1>
                        <p class="hero-tagline">{ TAGLINE }</p>
                    </Motion>
                    <Motion direction={RevealDirection::Fade} delay={0.3} class="hero-actions">
                        <a href="#experience" class="btn btn-primary btn-lg">{"View Experience ›"}</a>
                        <a href="#projects" class="btn btn-outline btn-lg">{"My Projects </>"}</a>
                    </Motion>
                    <Motion direction={RevealDirection::Fade} delay={0.6} class="hero-stack">
                        <p class="muted">{"Tech stack"}</p>
                        <div class="stack-row">
                            { for HERO_STACK.iter().map(|tech| html! {
                                <span class="stack-chip">{ *tech }</span>
                            }) }
                        </div>
                    </Motion>
                </div>

                <Motion direction={RevealDirection::Scale} delay={0.2} class="hero-card card">
                    <h3>{"Specialties"}</h3>
                    <ul class="specialty-list">
                        { for HERO_SPECIALTIES.iter().map(|(icon, label)| html! {
                            <li><span class="specialty-icon">{ *icon }</span>{ *label }</li>
                        }) }
                    </ul>
                </Motion>
            </Reveal>

            <a href="#about" class="scroll-hint" aria-label="Scroll to About">{"↓"}</a>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    padding-top: 5rem;
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1.3fr 1fr;
                    gap: 2rem;
                    align-items: center;
                    z-index: 1;
                }
                .hero-title {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    margin: 1rem 0;
                    min-height: 1.2em;
                }
                .gradient-text {
                    background: linear-gradient(90deg, var(--primary), var(--accent));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .caret {
                    animation: blink 1s step-end infinite;
                    color: var(--accent);
                }
                @keyframes blink {
                    50% { opacity: 0; }
                }
                .hero-tagline {
                    font-size: 1.25rem;
                    color: var(--text-muted);
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .stack-row {
                    display: flex;
                    gap: 0.75rem;
                }
                .stack-chip {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: var(--surface-muted);
                    font-weight: 600;
                    font-size: 0.8rem;
                }
                .specialty-list {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 0.75rem;
                }
                .specialty-icon {
                    margin-right: 0.75rem;
                }
                .glow {
                    position: absolute;
                    width: 20rem;
                    height: 20rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    opacity: 0.4;
                }
                .glow-right {
                    top: 5rem;
                    right: -5rem;
                    background: var(--accent);
                }
                .glow-left {
                    bottom: -10rem;
                    left: -5rem;
                    background: var(--primary);
                }
                .scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: var(--text-muted);
                    text-decoration: none;
                    font-size: 1.5rem;
                }
                @media (max-width: 900px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
