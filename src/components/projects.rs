use yew::prelude::*;

use crate::components::project_dialog::ProjectDialog;
use crate::components::reveal::{Motion, Section, SectionHeading};
use crate::content::projects::{find_project, project_tags, PROJECTS};
use crate::hooks::reveal::RevealDirection;
use crate::state::filter::CategoryFilter;

#[function_component(Projects)]
pub fn projects() -> Html {
    let filter = use_state(CategoryFilter::<&'static str>::default);
    let selected = use_state(|| None::<&'static str>);

    let tag_button = |f: CategoryFilter<&'static str>, label: &'static str| {
        let active = *filter == f;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(f.clone()))
        };
        html! {
            <button class={classes!("tab", "tab-sm", active.then_some("active"))} {onclick} aria-pressed={active.to_string()}>
                { label }
            </button>
        }
    };

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let visible = filter.apply(PROJECTS);

    html! {
        <Section id="projects">
            <SectionHeading
                badge="Portfolio"
                title="Notable Projects"
                subtitle={Some(AttrValue::from("Showcasing my technical capabilities through innovative projects that solve real-world problems."))}
            />

            <div class="tabs tag-filter">
                { tag_button(CategoryFilter::All, "All") }
                { for project_tags().into_iter().map(|tag| tag_button(CategoryFilter::Only(tag), tag)) }
            </div>

            <div class="project-grid">
                { for visible.iter().enumerate().map(|(i, project)| {
                    let open = {
                        let selected = selected.clone();
                        let id = project.id;
                        Callback::from(move |_: MouseEvent| selected.set(Some(id)))
                    };
                    html! {
                        <Motion key={project.id} direction={RevealDirection::Scale} delay={0.2 * i as f64} class="card project-card">
                            <div class="record-head">
                                <span class="record-icon">{ project.icon }</span>
                                <span class="badge badge-outline">{ project.year }</span>
                            </div>
                            <h3 class="project-title">{ project.title }</h3>
                            <p class="muted">{ project.description }</p>
                            <div class="pill-row">
                                { for project.tags.iter().map(|tag| html! { <span class="skill-pill">{ *tag }</span> }) }
                            </div>
                            <button class="btn btn-outline" onclick={open}>{"Learn More →"}</button>
                        </Motion>
                    }
                }) }
            </div>
            if visible.is_empty() {
                <p class="muted empty">{"No projects with this tag."}</p>
            }

            if let Some(project) = selected.and_then(find_project) {
                <ProjectDialog key={project.id} {project} on_close={close} />
            }

            <style>
                {r#"
                .tag-filter {
                    flex-wrap: wrap;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .project-card {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .project-card:hover {
                    border-color: var(--accent);
                    box-shadow: 0 10px 30px -10px var(--accent-soft);
                }
                .project-title {
                    margin: 0.5rem 0 0;
                }
                .project-card .btn {
                    margin-top: auto;
                    align-self: flex-start;
                }
                .pill-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .skill-pill {
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                    font-size: 0.8rem;
                    background: var(--accent-soft);
                    color: var(--accent);
                }
                @media (max-width: 900px) {
                    .project-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </Section>
    }
}
