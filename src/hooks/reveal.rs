use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Browsers report ratios like 0.0999 when crossing a 0.1 threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-shot latch behind every reveal: false → true once, never back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feeds one observation; returns true only on the call that trips the latch.
    pub fn observe(&mut self, intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.fired || !intersecting || ratio + RATIO_TOLERANCE < threshold {
            return false;
        }
        self.fired = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealDirection {
    Up,
    Down,
    Left,
    Right,
    Scale,
    Fade,
}

impl RevealDirection {
    fn hidden_transform(self) -> &'static str {
        match self {
            RevealDirection::Up => "translateY(20px)",
            RevealDirection::Down => "translateY(-20px)",
            RevealDirection::Left => "translateX(-20px)",
            RevealDirection::Right => "translateX(20px)",
            RevealDirection::Scale => "scale(0.9)",
            RevealDirection::Fade => "none",
        }
    }
}

/// Inline style for an element animating from its hidden pose to rest.
pub fn motion_style(visible: bool, direction: RevealDirection, delay_secs: f64) -> String {
    let (opacity, transform) = if visible {
        ("1", "none")
    } else {
        ("0", direction.hidden_transform())
    };
    // no delay on the way out so skeleton swaps don't linger
    let delay = if visible { delay_secs } else { 0.0 };
    format!(
        "opacity: {opacity}; transform: {transform}; transition: opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s;",
        d = config::REVEAL_DURATION_SECS,
        e = config::REVEAL_EASING,
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: "0px",
            delay_ms: 0,
        }
    }
}

struct OnceWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OnceWatcher {
    fn observe(target: &Element, options: &RevealOptions, on_reveal: Rc<dyn Fn()>) -> Result<Self, JsValue> {
        let threshold = options.threshold;
        let mut latch = RevealLatch::default();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if latch.observe(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                        observer.disconnect();
                        on_reveal();
                        break;
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(options.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Flips to true the first time `node` scrolls into view and stays there.
///
/// The observer is disconnected after it fires and again on unmount. A
/// pending delayed reveal is cancelled on unmount. If the element is not
/// mounted or the browser lacks `IntersectionObserver` the content is
/// revealed straight away rather than left invisible.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
                let show: Rc<dyn Fn()> = {
                    let pending = pending.clone();
                    let delay_ms = options.delay_ms;
                    Rc::new(move || {
                        if delay_ms == 0 {
                            visible.set(true);
                        } else {
                            let visible = visible.clone();
                            *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || visible.set(true)));
                        }
                    })
                };

                let watcher = match node.cast::<Element>() {
                    Some(target) => match OnceWatcher::observe(&target, options, show.clone()) {
                        Ok(watcher) => Some(watcher),
                        Err(err) => {
                            warn!("IntersectionObserver unavailable ({:?}), revealing immediately", err);
                            show();
                            None
                        }
                    },
                    None => {
                        warn!("Reveal target not mounted, revealing immediately");
                        show();
                        None
                    }
                };

                move || {
                    if let Some(watcher) = watcher {
                        watcher.disconnect();
                    }
                    pending.borrow_mut().take();
                }
            },
            (node, options),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false, 0.0, 0.1));
        assert!(!latch.observe(true, 0.05, 0.1));
        assert!(!latch.has_fired());

        assert!(latch.observe(true, 0.1, 0.1));
        assert!(latch.has_fired());

        // scrolling away and back never re-triggers or resets
        assert!(!latch.observe(false, 0.0, 0.1));
        assert!(!latch.observe(true, 1.0, 0.1));
        assert!(latch.has_fired());
    }

    #[test]
    fn latch_tolerates_rounding_at_threshold() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true, 0.0999, 0.1));
    }

    #[test]
    fn latch_never_returns_to_hidden_over_any_sequence() {
        let observations = [
            (true, 0.2),
            (false, 0.0),
            (true, 0.01),
            (true, 0.9),
            (false, 0.0),
        ];
        let mut latch = RevealLatch::default();
        let mut fired = 0;
        let mut was_visible = false;
        for (intersecting, ratio) in observations {
            if latch.observe(intersecting, ratio, 0.1) {
                fired += 1;
            }
            assert!(!was_visible || latch.has_fired());
            was_visible = latch.has_fired();
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn hidden_style_is_offset_and_transparent() {
        let style = motion_style(false, RevealDirection::Up, 0.3);
        assert!(style.starts_with("opacity: 0; transform: translateY(20px);"));
        assert!(style.contains("0.6s cubic-bezier(0.22, 1, 0.36, 1) 0s"));
    }

    #[test]
    fn visible_style_rests_with_delay() {
        let style = motion_style(true, RevealDirection::Left, 0.3);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains(" 0.3s"));
    }
}
