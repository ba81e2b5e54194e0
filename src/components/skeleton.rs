use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkeletonKind {
    #[default]
    Default,
    Experience,
    Skill,
    Education,
    Project,
}

fn bar(class: &'static str) -> Html {
    html! { <div class={classes!("skeleton", class)} /> }
}

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    #[prop_or_default]
    pub kind: SkeletonKind,
}

/// Grey placeholder shaped roughly like the content it stands in for.
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    let body = match props.kind {
        SkeletonKind::Project => html! {
            <div class="skeleton-card">
                { bar("sk-media") }
                { bar("sk-title") }
                { bar("sk-line") }
                { bar("sk-line") }
                { bar("sk-line-short") }
                <div class="sk-row">{ bar("sk-pill") }{ bar("sk-pill") }</div>
            </div>
        },
        SkeletonKind::Skill => html! {
            <div class="skeleton-stack">
                { bar("sk-title") }
                { for (0..3).map(|_| html! {
                    <>
                        <div class="sk-row sk-spread">{ bar("sk-label") }{ bar("sk-value") }</div>
                        { bar("sk-progress") }
                    </>
                }) }
            </div>
        },
        SkeletonKind::Experience => html! {
            <div class="skeleton-stack">
                { for (0..3).map(|_| html! {
                    <div class="sk-row">
                        { bar("sk-dot") }
                        <div class="skeleton-stack sk-grow">
                            { bar("sk-title") }
                            { bar("sk-line-short") }
                            { bar("sk-line") }
                        </div>
                    </div>
                }) }
            </div>
        },
        SkeletonKind::Education => html! {
            <div class="skeleton-card">
                <div class="sk-row sk-spread">{ bar("sk-dot") }{ bar("sk-value") }</div>
                { bar("sk-title") }
                { bar("sk-line-short") }
                { bar("sk-line") }
            </div>
        },
        SkeletonKind::Default => html! {
            <div class="skeleton-stack">
                { bar("sk-title") }
                { bar("sk-line") }
                { bar("sk-line") }
                { bar("sk-line-short") }
            </div>
        },
    };

    html! {
        <div class="skeleton-wrap" aria-busy="true" aria-label="Loading">
            { body }
        </div>
    }
}

/// Sections below the hero, in page order, with the placeholder each shows
/// while the initial load delay runs.
pub const SECTION_PLACEHOLDERS: &[(&str, SkeletonKind)] = &[
    ("about", SkeletonKind::Default),
    ("experience", SkeletonKind::Experience),
    ("skills", SkeletonKind::Skill),
    ("education", SkeletonKind::Education),
    ("projects", SkeletonKind::Project),
    ("contact", SkeletonKind::Default),
];

#[derive(Properties, PartialEq)]
pub struct SectionSkeletonProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub kind: SkeletonKind,
}

/// Stands in for a whole section and keeps its id so anchor links still land.
#[function_component(SectionSkeleton)]
pub fn section_skeleton(props: &SectionSkeletonProps) -> Html {
    let columns = match props.kind {
        SkeletonKind::Skill | SkeletonKind::Education | SkeletonKind::Project => 2,
        SkeletonKind::Default | SkeletonKind::Experience => 1,
    };

    html! {
        <section id={props.id.clone()} class="section">
            <div class="container sk-grid">
                { for (0..columns).map(|_| html! { <Skeleton kind={props.kind} /> }) }
            </div>
        </section>
    }
}

pub const SKELETON_STYLES: &str = r#"
.skeleton {
    border-radius: 0.375rem;
    background: var(--surface-muted);
    animation: pulse 1.5s ease-in-out infinite;
}
@keyframes pulse {
    50% { opacity: 0.5; }
}
.skeleton-stack, .skeleton-card {
    display: grid;
    gap: 0.75rem;
}
.sk-row {
    display: flex;
    gap: 0.75rem;
    align-items: center;
}
.sk-spread {
    justify-content: space-between;
}
.sk-grow {
    flex: 1;
}
.sk-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
    gap: 2rem;
}
.sk-media { height: 14rem; }
.sk-title { height: 1.75rem; width: 60%; }
.sk-line { height: 1rem; width: 100%; }
.sk-line-short { height: 1rem; width: 66%; }
.sk-pill { height: 2rem; width: 5rem; border-radius: 999px; }
.sk-label { height: 1.25rem; width: 25%; }
.sk-value { height: 1rem; width: 3rem; }
.sk-progress { height: 0.5rem; width: 100%; }
.sk-dot { height: 2.5rem; width: 2.5rem; border-radius: 50%; flex-shrink: 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hero_is_never_replaced_by_a_placeholder() {
        assert!(SECTION_PLACEHOLDERS.iter().all(|(id, _)| *id != "home"));
    }

    #[test]
    fn every_section_below_the_hero_has_a_matching_placeholder() {
        let ids: Vec<&str> = SECTION_PLACEHOLDERS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["about", "experience", "skills", "education", "projects", "contact"]);

        let kinds: Vec<SkeletonKind> = SECTION_PLACEHOLDERS.iter().map(|(_, kind)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                SkeletonKind::Default,
                SkeletonKind::Experience,
                SkeletonKind::Skill,
                SkeletonKind::Education,
                SkeletonKind::Project,
                SkeletonKind::Default,
            ]
        );
    }
}
