use yew::prelude::*;

use crate::components::reveal::{Motion, Section, SectionHeading};
use crate::components::skill_chart::SkillChart;
use crate::content::profile::{EMAIL, LOCATION, SPECIALIZATIONS, SPECIALIZATION_LABELS, SUMMARY};
use crate::hooks::reveal::RevealDirection;

#[function_component(About)]
pub fn about() -> Html {
    let show_chart = use_state(|| false);

    let toggle_chart = {
        let show_chart = show_chart.clone();
        Callback::from(move |_: MouseEvent| show_chart.set(!*show_chart))
    };

    html! {
        <Section id="about">
            <SectionHeading badge="About Me" title="Professional Summary" />

            <div class="about-grid">
                <Motion direction={RevealDirection::Left} delay={0.2} class="card glass about-summary">
                    { for SUMMARY.iter().map(|paragraph| html! { <p class="lead">{ *paragraph }</p> }) }

                    <button class="link-button" onclick={toggle_chart} aria-expanded={show_chart.to_string()}>
                        if *show_chart {
                            {"Hide Specializations Chart ▴"}
                        } else {
                            {"View Specializations Chart ▾"}
                        }
                    </button>
                    if *show_chart {
                        <SkillChart data={SPECIALIZATIONS} />
                    }
                </Motion>

                <div class="about-side">
                    <Motion direction={RevealDirection::Right} delay={0.4} class="card glass">
                        <h3>{"Contact Information"}</h3>
                        <ul class="icon-list">
                            <li><span class="text-accent">{"✉"}</span><a href={format!("mailto:{}", EMAIL)}>{ EMAIL }</a></li>
                            <li><span class="text-accent">{"⌖"}</span>{ LOCATION }</li>
                        </ul>
                    </Motion>
                    <Motion direction={RevealDirection::Right} delay={0.5} class="card glass">
                        <h3>{"Specializations"}</h3>
                        <ul class="icon-list">
                            { for SPECIALIZATION_LABELS.iter().map(|(icon, label)| html! {
                                <li><span class="text-accent">{ *icon }</span>{ *label }</li>
                            }) }
                        </ul>
                    </Motion>
                </div>
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                }
                .about-side {
                    display: grid;
                    gap: 1.5rem;
                    align-content: start;
                }
                .icon-list {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 0.75rem;
                }
                .icon-list li {
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                }
                .link-button {
                    display: block;
                    margin: 1.5rem auto 0;
                    background: none;
                    border: none;
                    color: var(--accent);
                    font-weight: 500;
                    cursor: pointer;
                }
                .link-button:hover {
                    text-decoration: underline;
                }
                @media (max-width: 900px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </Section>
    }
}
