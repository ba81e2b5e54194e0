use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

const MAX_VISIBLE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        kind: ToastKind,
    },
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push { title, description, kind } => {
                queue.toasts.push(Toast {
                    id: queue.next_id,
                    title,
                    description,
                    kind,
                });
                queue.next_id = queue.next_id.wrapping_add(1);
                if queue.toasts.len() > MAX_VISIBLE {
                    let overflow = queue.toasts.len() - MAX_VISIBLE;
                    queue.toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => queue.toasts.retain(|t| t.id != id),
        }
        Rc::new(queue)
    }
}

/// Handle for raising toasts from any component under `ToastProvider`.
#[derive(Clone, PartialEq)]
pub struct Toaster(UseReducerHandle<ToastQueue>);

impl Toaster {
    pub fn raise(&self, action: ToastAction) {
        self.0.dispatch(action);
    }

    pub fn show(&self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) {
        self.0.dispatch(ToastAction::Push {
            title: title.into(),
            description: description.into(),
            kind,
        });
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastKind::Success, title, description);
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastKind::Info, title, description);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastKind::Error, title, description);
    }

    fn dismiss(&self, id: u32) {
        self.0.dispatch(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toast() -> Toaster {
    use_context::<Toaster>().expect("use_toast called outside ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer_eq(ToastQueue::default);
    let toaster = Toaster(queue.clone());

    html! {
        <ContextProvider<Toaster> context={toaster.clone()}>
            { for props.children.iter() }
            <div class="toast-stack" role="status" aria-live="polite">
                { for queue.toasts().iter().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} toaster={toaster.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .toast-stack {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    z-index: 100;
                    width: min(420px, calc(100vw - 2rem));
                }
                .toast {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-left: 4px solid var(--primary);
                    border-radius: 10px;
                    padding: 0.85rem 1rem;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    animation: toastIn 0.3s ease-out;
                    cursor: pointer;
                }
                .toast-success { border-left-color: #22c55e; }
                .toast-error { border-left-color: #ef4444; }
                .toast-title { font-weight: 600; }
                .toast-description { color: var(--text-muted); font-size: 0.9rem; margin-top: 0.2rem; }
                @keyframes toastIn {
                    from { transform: translateY(12px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    toaster: Toaster,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    {
        let toaster = props.toaster.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || toaster.dismiss(id));
                // dropping the timeout cancels it if the toast goes first
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let onclick = {
        let toaster = props.toaster.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| toaster.dismiss(id))
    };

    html! {
        <div class={props.toast.kind.class()} {onclick}>
            <div class="toast-title">{ &props.toast.title }</div>
            if !props.toast.description.is_empty() {
                <div class="toast-description">{ &props.toast.description }</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn push(queue: Rc<ToastQueue>, title: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push {
            title: title.to_string(),
            description: String::new(),
            kind: ToastKind::Info,
        })
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let queue = push(push(Rc::default(), "one"), "two");
        let ids: Vec<u32> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn oldest_toasts_fall_off() {
        let mut queue = Rc::<ToastQueue>::default();
        for title in ["a", "b", "c", "d", "e"] {
            queue = push(queue, title);
        }
        let titles: Vec<&str> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "d", "e"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let queue = push(push(Rc::default(), "one"), "two");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "two");

        let unchanged = queue.clone().reduce(ToastAction::Dismiss(42));
        assert_eq!(unchanged, queue);
    }
}
