use yew::prelude::*;

use crate::components::reveal::{Motion, Revealed, Section, SectionBackground, SectionHeading};
use crate::content::models::{Skill, SkillCategory, SkillLevel};
use crate::content::skills::{SKILLS, SKILL_AREAS};
use crate::hooks::reveal::RevealDirection;
use crate::state::filter::CategoryFilter;

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    skill: &'static Skill,
    delay: f64,
}

/// Bars grow from zero once their section has been revealed.
#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let revealed = use_context::<Revealed>().map(|r| r.0).unwrap_or(true);
    let skill = props.skill;
    let width = if revealed { skill.proficiency } else { 0 };

    html! {
        <Motion delay={props.delay} class="skill-row">
            <div class="skill-label">
                <span class="skill-name">{ skill.name }</span>
                <span class="muted">{ format!("{}%", skill.proficiency) }</span>
            </div>
            <div
                class="progress"
                role="progressbar"
                aria-valuenow={skill.proficiency.to_string()}
                aria-valuemin="0"
                aria-valuemax="100"
                aria-label={skill.name}
            >
                <div
                    class="progress-fill"
                    style={format!("width: {}%; background: {};", width, skill.level().color())}
                />
            </div>
        </Motion>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let filter = use_state(|| CategoryFilter::Only(SkillCategory::Programming));

    let tab = |f: CategoryFilter<SkillCategory>, icon: &'static str, label: &'static str| {
        let active = *filter == f;
        let count = f.count(SKILLS);
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(f.clone()))
        };
        html! {
            <button class={classes!("category-card", active.then_some("active"))} {onclick} aria-pressed={active.to_string()}>
                <span class="category-icon">{ icon }</span>
                <span>
                    <span class="category-name">{ label }</span>
                    <span class="category-count">{ format!("{} skills", count) }</span>
                </span>
            </button>
        }
    };

    let heading = match &*filter {
        CategoryFilter::All => "All Skills",
        CategoryFilter::Only(category) => category.label(),
    };

    html! {
        <Section id="skills" background={SectionBackground::Muted}>
            <SectionHeading
                badge="Expertise"
                title="Technical Skills"
                subtitle={Some(AttrValue::from("My technical toolkit representing my proficiency across various technologies and methodologies."))}
            />

            <div class="skills-grid">
                <Motion direction={RevealDirection::Left} class="skills-sidebar">
                    { tab(CategoryFilter::All, "★", "All Skills") }
                    { for SkillCategory::ALL.iter().map(|c| tab(CategoryFilter::Only(*c), c.icon(), c.label())) }

                    <div class="card glass level-legend">
                        <h3>{"Skill Levels"}</h3>
                        <ul>
                            { for SkillLevel::ALL.iter().map(|level| html! {
                                <li>
                                    <span class="legend-dot" style={format!("background: {};", level.color())} />
                                    { level.legend() }
                                </li>
                            }) }
                        </ul>
                    </div>
                </Motion>

                <div class="skills-main">
                    <div class="card skills-panel">
                        <h3>{ heading }</h3>
                        { for filter.apply(SKILLS).into_iter().enumerate().map(|(i, skill)| html! {
                            <SkillBar key={skill.name} {skill} delay={0.05 * i as f64} />
                        }) }
                    </div>

                    <div class="skill-areas">
                        { for SKILL_AREAS.iter().enumerate().map(|(i, area)| html! {
                            <Motion direction={RevealDirection::Scale} delay={0.1 * i as f64} class="card skill-area">
                                <span class="text-accent">{ area.icon }</span>
                                <h4>{ area.title }</h4>
                                <p class="muted">{ area.description }</p>
                            </Motion>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .skills-grid {
                    display: grid;
                    grid-template-columns: 1fr 3fr;
                    gap: 2rem;
                }
                .skills-sidebar {
                    display: grid;
                    gap: 1rem;
                    align-content: start;
                }
                .category-card {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    border: none;
                    background: var(--surface-muted);
                    color: inherit;
                    text-align: left;
                    cursor: pointer;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .category-card:hover {
                    transform: translateY(-2px);
                }
                .category-card.active {
                    background: var(--accent);
                    color: #fff;
                }
                .category-name {
                    display: block;
                    font-weight: 500;
                }
                .category-count {
                    font-size: 0.85rem;
                    opacity: 0.8;
                }
                .level-legend ul {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                }
                .legend-dot {
                    display: inline-block;
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    margin-right: 0.5rem;
                }
                .skills-panel {
                    display: grid;
                    gap: 1.5rem;
                }
                .skill-label {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 0.5rem;
                }
                .skill-name {
                    font-weight: 500;
                }
                .progress {
                    height: 0.5rem;
                    border-radius: 999px;
                    background: var(--surface-muted);
                    overflow: hidden;
                }
                .progress-fill {
                    height: 100%;
                    border-radius: inherit;
                    transition: width 1s ease-in-out;
                }
                .skill-areas {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    margin-top: 2rem;
                }
                @media (max-width: 900px) {
                    .skills-grid {
                        grid-template-columns: 1fr;
                    }
                    .skill-areas {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </Section>
    }
}
