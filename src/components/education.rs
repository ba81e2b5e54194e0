use yew::prelude::*;

use crate::components::reveal::{Motion, Section, SectionBackground, SectionHeading};
use crate::content::education::{ACHIEVEMENTS, CERTIFICATES, EDUCATION};
use crate::hooks::reveal::RevealDirection;

#[function_component(Education)]
pub fn education() -> Html {
    html! {
        <Section id="education" background={SectionBackground::Muted}>
            <SectionHeading
                badge="Academic Background"
                title="Education & Certifications"
                subtitle={Some(AttrValue::from("My academic journey and professional certifications that have shaped my knowledge and expertise."))}
            />

            <div class="education-grid">
                <div class="education-main">
                    <h3>{"Academic Education"}</h3>
                    { for EDUCATION.iter().enumerate().map(|(i, edu)| html! {
                        <Motion key={edu.id} delay={0.2 * i as f64} class="card record-card">
                            <div class="record-head">
                                <span class="record-icon">{ edu.icon }</span>
                                <span class="badge badge-outline">{ edu.period }</span>
                            </div>
                            <h4>{ edu.degree }</h4>
                            <p class="muted">{ format!("{} • {}", edu.institution, edu.location) }</p>
                            <p class="muted">{ edu.description }</p>
                        </Motion>
                    }) }

                    <h3>{"Achievements"}</h3>
                    { for ACHIEVEMENTS.iter().map(|achievement| html! {
                        <Motion key={achievement.id} delay={0.4} class="card record-card">
                            <div class="record-head">
                                <span class="record-icon">{"🏆"}</span>
                                <span class="badge badge-outline">{ achievement.year }</span>
                            </div>
                            <h4>{ achievement.title }</h4>
                            <p class="muted">{ achievement.description }</p>
                        </Motion>
                    }) }
                </div>

                <div>
                    <h3>{"Certifications"}</h3>
                    <div class="card cert-list">
                        { for CERTIFICATES.iter().enumerate().map(|(i, cert)| html! {
                            <Motion key={cert.id} direction={RevealDirection::Right} delay={0.1 * i as f64} class="cert-row">
                                <span class="record-icon">{"📜"}</span>
                                <div>
                                    <p class="cert-name">{ cert.name }</p>
                                    <p class="muted">{ format!("{} • {}", cert.issuer, cert.year) }</p>
                                </div>
                            </Motion>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .education-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                }
                .education-main {
                    display: grid;
                    gap: 1.5rem;
                }
                .record-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                }
                .record-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--accent-soft);
                }
                .cert-list {
                    display: grid;
                    gap: 0;
                }
                .cert-row {
                    display: flex;
                    gap: 1rem;
                    padding: 0.75rem 0;
                    border-bottom: 1px solid var(--border);
                }
                .cert-row:last-child {
                    border-bottom: none;
                }
                .cert-name {
                    font-weight: 500;
                    margin: 0;
                }
                @media (max-width: 900px) {
                    .education-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </Section>
    }
}
