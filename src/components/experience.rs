use yew::prelude::*;

use crate::components::reveal::{Motion, Section, SectionBackground, SectionHeading};
use crate::content::experience::EXPERIENCES;
use crate::content::models::{ExperienceCategory, WorkExperience};
use crate::hooks::reveal::RevealDirection;
use crate::state::expand::Expansion;
use crate::state::filter::CategoryFilter;

/// Duties shown before "show all" is pressed.
const PREVIEW_DUTIES: usize = 3;

#[derive(Properties, PartialEq)]
struct DetailProps {
    experience: &'static WorkExperience,
    expanded: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(ExperienceDetail)]
fn experience_detail(props: &DetailProps) -> Html {
    let exp = props.experience;
    let hidden = exp.description.len().saturating_sub(PREVIEW_DUTIES);
    let shown = if props.expanded { exp.description.len() } else { PREVIEW_DUTIES };

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = exp.id;
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };

    html! {
        <div class="card glass experience-detail">
            <div class="detail-meta">
                if let Some(tag) = exp.tag {
                    <span class="badge badge-primary">{ tag }</span>
                }
                <span class="muted">{ exp.organization }</span>
            </div>
            <h3 class="detail-title">{ exp.title }</h3>
            <p class="muted">{ format!("{} • {}", exp.location, exp.period) }</p>
            <hr />
            <ul class="duty-list">
                { for exp.description.iter().take(shown).map(|duty| html! { <li>{ *duty }</li> }) }
            </ul>
            if hidden > 0 {
                <button class="link-button" {onclick} aria-expanded={props.expanded.to_string()}>
                    if props.expanded {
                        {"Show less"}
                    } else {
                        { format!("Show {} more", hidden) }
                    }
                </button>
            }
        </div>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    let filter = use_state(CategoryFilter::<ExperienceCategory>::default);
    let selected = use_state(|| EXPERIENCES.first().map(|e| e.id));
    let expansion = use_state(Expansion::new);

    let visible = filter.apply(EXPERIENCES);
    let current = visible
        .iter()
        .copied()
        .find(|e| Some(e.id) == *selected)
        .or_else(|| visible.first().copied());

    let select_filter = |next: CategoryFilter<ExperienceCategory>| {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(next.clone()))
    };

    let on_toggle = {
        let expansion = expansion.clone();
        Callback::from(move |id: &'static str| expansion.set(expansion.toggled(id)))
    };

    let tabs = std::iter::once((CategoryFilter::All, "All", EXPERIENCES.len()))
        .chain(ExperienceCategory::ALL.iter().map(|c| {
            let f = CategoryFilter::Only(*c);
            let count = f.count(EXPERIENCES);
            (f, c.label(), count)
        }))
        .map(|(f, label, count)| {
            let active = *filter == f;
            html! {
                <button
                    class={classes!("tab", active.then_some("active"))}
                    role="tab"
                    aria-selected={active.to_string()}
                    onclick={select_filter(f)}
                >
                    { label }<span class="tab-count">{ count }</span>
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <Section id="experience" background={SectionBackground::Gradient}>
            <SectionHeading
                badge="Work History"
                title="My"
                highlight={Some(AttrValue::from("Experience"))}
                subtitle={Some(AttrValue::from("A chronological display of my professional journey, showcasing roles and responsibilities that have shaped my expertise in software engineering, testing, and electronic systems."))}
            />

            <div class="tabs" role="tablist">{ tabs }</div>

            <div class="experience-grid">
                <ol class="timeline">
                    { for visible.iter().enumerate().map(|(i, exp)| {
                        let active = current.map(|c| c.id) == Some(exp.id);
                        let onclick = {
                            let selected = selected.clone();
                            let id = exp.id;
                            Callback::from(move |_: MouseEvent| selected.set(Some(id)))
                        };
                        html! {
                            <li key={exp.id} class="timeline-item">
                                <span class={classes!("timeline-dot", active.then_some("active"))} />
                                <Motion direction={RevealDirection::Left} delay={0.1 * i as f64}>
                                    <button class={classes!("timeline-card", active.then_some("active"))} {onclick}>
                                        <span class="timeline-title">{ exp.title }</span>
                                        <span class="muted">{ exp.organization }</span>
                                        <span class="timeline-period">{ exp.period }</span>
                                    </button>
                                </Motion>
                            </li>
                        }
                    }) }
                </ol>

                <div class="experience-panel">
                    if let Some(exp) = current {
                        <ExperienceDetail
                            key={exp.id}
                            experience={exp}
                            expanded={expansion.is_open(exp.id)}
                            on_toggle={on_toggle}
                        />
                    } else {
                        <p class="muted empty">{"No roles in this category."}</p>
                    }
                </div>
            </div>

            <style>
                {r#"
                .experience-grid {
                    display: grid;
                    grid-template-columns: 5fr 7fr;
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .timeline {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    position: relative;
                }
                .timeline::before {
                    content: "";
                    position: absolute;
                    left: 11px;
                    top: 0.75rem;
                    bottom: 0;
                    width: 3px;
                    background: var(--border);
                }
                .timeline-item {
                    position: relative;
                    padding-left: 2.5rem;
                    margin-bottom: 1.5rem;
                }
                .timeline-dot {
                    position: absolute;
                    left: 7px;
                    top: 1.5rem;
                    width: 11px;
                    height: 11px;
                    border-radius: 50%;
                    border: 2px solid var(--text-muted);
                    background: var(--bg);
                    z-index: 1;
                }
                .timeline-dot.active {
                    background: var(--primary);
                    border-color: var(--primary);
                }
                .timeline-card {
                    width: 100%;
                    display: grid;
                    gap: 0.25rem;
                    text-align: left;
                    padding: 1.25rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    color: inherit;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .timeline-card:hover, .timeline-card.active {
                    background: var(--primary-soft);
                }
                .timeline-title {
                    font-weight: 600;
                }
                .timeline-period {
                    font-size: 0.85rem;
                    color: var(--text-muted);
                }
                .experience-panel {
                    position: sticky;
                    top: 6rem;
                    align-self: start;
                }
                .detail-meta {
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                }
                .duty-list {
                    display: grid;
                    gap: 0.75rem;
                    padding-left: 1.25rem;
                }
                @media (max-width: 900px) {
                    .experience-grid {
                        grid-template-columns: 1fr;
                    }
                    .experience-panel {
                        position: static;
                    }
                }
                "#}
            </style>
        </Section>
    }
}
