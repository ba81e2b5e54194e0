use yew::prelude::*;

use crate::config;
use crate::hooks::reveal::{motion_style, use_reveal, RevealDirection, RevealOptions};

/// Reveal state shared with everything rendered inside a `Reveal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Revealed(pub bool);

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(RevealDirection::Up)]
    pub direction: RevealDirection,
    /// Sections animate their children, not themselves.
    #[prop_or(true)]
    pub animate: bool,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let options = RevealOptions {
        threshold: props.threshold,
        delay_ms: props.delay_ms,
        ..RevealOptions::default()
    };
    let visible = use_reveal(node.clone(), options);

    let style = props
        .animate
        .then(|| motion_style(visible, props.direction, 0.0));

    html! {
        <ContextProvider<Revealed> context={Revealed(visible)}>
            <@{props.tag.to_string()}
                ref={node}
                id={props.id.clone()}
                class={classes!(props.class.clone(), visible.then_some("revealed"))}
                style={style}
            >
                { for props.children.iter() }
            </@>
        </ContextProvider<Revealed>>
    }
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(RevealDirection::Up)]
    pub direction: RevealDirection,
    #[prop_or(0.0)]
    pub delay: f64,
}

/// Animates with the nearest enclosing `Reveal`. Outside one it renders at rest.
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let visible = use_context::<Revealed>().map(|r| r.0).unwrap_or(true);

    html! {
        <div class={props.class.clone()} style={motion_style(visible, props.direction, props.delay)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionBackground {
    #[default]
    Plain,
    Muted,
    Gradient,
}

impl SectionBackground {
    fn class(self) -> &'static str {
        match self {
            SectionBackground::Plain => "section",
            SectionBackground::Muted => "section section-muted",
            SectionBackground::Gradient => "section section-gradient",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub background: SectionBackground,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub children: Children,
}

/// A page section whose children reveal together when it scrolls into view.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <Reveal
            tag="section"
            id={Some(props.id.clone())}
            class={classes!(props.background.class())}
            threshold={props.threshold}
            animate={false}
        >
            <div class="container">
                { for props.children.iter() }
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub badge: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Motion class="section-heading">
            <span class="badge badge-outline">{ &props.badge }</span>
            <h2>
                { &props.title }
                if let Some(highlight) = &props.highlight {
                    {" "}<span class="text-primary">{ highlight }</span>
                }
            </h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="section-subtitle">{ subtitle }</p>
            }
        </Motion>
    }
}
