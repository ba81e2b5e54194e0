use yew::prelude::*;

use crate::theme::{use_theme, ThemeAction, PRESETS};
use crate::toast::{use_toast, ToastAction, ToastKind};

fn palette_applied() -> ToastAction {
    ToastAction::Push {
        title: "Theme Updated".into(),
        description: "Your custom theme has been applied.".into(),
        kind: ToastKind::Success,
    }
}

/// Popover with the palette presets.
#[function_component(ThemeCustomizer)]
pub fn theme_customizer() -> Html {
    let theme = use_theme();
    let toaster = use_toast();
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="theme-customizer">
            <button class="btn btn-ghost btn-icon" onclick={toggle} aria-label="Customize theme colours">
                {"🎨"}
            </button>
            if *open {
                <div class="theme-popover" role="dialog" aria-label="Theme colours">
                    <p class="theme-popover-title">{"Accent colour"}</p>
                    <div class="theme-swatches">
                        { for PRESETS.iter().map(|preset| {
                            let selected = theme.palette.primary == preset.primary
                                && theme.palette.accent == preset.accent;
                            let onclick = {
                                let theme = theme.clone();
                                let open = open.clone();
                                let toaster = toaster.clone();
                                let palette = preset.palette();
                                Callback::from(move |_: MouseEvent| {
                                    theme.dispatch(ThemeAction::ApplyPalette(palette.clone()));
                                    open.set(false);
                                    toaster.raise(palette_applied());
                                })
                            };
                            html! {
                                <button
                                    class={classes!("theme-swatch", selected.then_some("selected"))}
                                    style={format!("background: linear-gradient(135deg, {} 50%, {} 50%);", preset.primary, preset.accent)}
                                    title={preset.name}
                                    aria-pressed={selected.to_string()}
                                    {onclick}
                                />
                            }
                        }) }
                    </div>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use yew::Reducible;

    use super::*;
    use crate::toast::ToastQueue;

    #[test]
    fn picking_a_preset_raises_a_success_toast() {
        let queue = Rc::<ToastQueue>::default().reduce(palette_applied());
        let toast = &queue.toasts()[0];
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Theme Updated");
        assert_eq!(toast.description, "Your custom theme has been applied.");
    }
}
