use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Share of the element that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Vertical distance, in px, an unrevealed element sits below its resting place.
pub const REVEAL_OFFSET_PX: f64 = 20.0;
pub const STAGGER_STEP_MS: u32 = 200;

/// Flips to revealed the first time an observation crosses the threshold and
/// never flips back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Returns true only for the observation that reveals the element.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl RevealTiming {
    pub const SECTION: Self = Self { duration_ms: 800, delay_ms: 0 };
    pub const CARD: Self = Self { duration_ms: 500, delay_ms: 0 };

    /// Delay proportional to the sibling's position in a list.
    pub fn staggered(self, index: usize) -> Self {
        Self {
            delay_ms: self.delay_ms + STAGGER_STEP_MS * index as u32,
            ..self
        }
    }
}

pub fn reveal_style(revealed: bool, timing: RevealTiming) -> String {
    let (opacity, offset) = if revealed { (1.0, 0.0) } else { (0.0, REVEAL_OFFSET_PX) };
    format!(
        "opacity: {}; transform: translateY({}px); transition: opacity {}ms ease-out {}ms, transform {}ms ease-out {}ms;",
        opacity, offset, timing.duration_ms, timing.delay_ms, timing.duration_ms, timing.delay_ms
    )
}

/// An observer watching one element. Disconnects when dropped.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Calls `on_visible` once, the first time `element` crosses the reveal
/// threshold. Errors when the browser cannot observe the element.
pub fn notify_once_visible(element: &Element, on_visible: Callback<()>) -> Result<VisibilityWatch, JsValue> {
    if !observer_supported() {
        return Err(JsValue::from_str("IntersectionObserver is not available"));
    }

    let mut latch = RevealLatch::default();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                observer.disconnect();
                on_visible.emit(());
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(VisibilityWatch { observer, _callback: callback })
}

/// Whether the element behind `node` has been revealed. Without a working
/// observer the element is shown straight away.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let show = Callback::from(move |_| revealed.set(true));
                let watch = match node.cast::<Element>() {
                    Some(element) => match notify_once_visible(&element, show.clone()) {
                        Ok(watch) => Some(watch),
                        Err(e) => {
                            warn!("Reveal observer unavailable, showing content: {:?}", e);
                            show.emit(());
                            None
                        }
                    },
                    None => {
                        show.emit(());
                        None
                    }
                };
                move || drop(watch)
            },
            node,
        );
    }
    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(RevealTiming::SECTION)]
    pub timing: RevealTiming,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(revealed, props.timing)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_waits_for_threshold() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 0.05));
        assert!(!latch.revealed);
        assert!(latch.observe(true, 0.1));
        assert!(latch.revealed);
    }

    #[test]
    fn test_latch_fires_once_and_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true, 0.6));
        // scrolled away and back again
        assert!(!latch.observe(false, 0.0));
        assert!(latch.revealed);
        assert!(!latch.observe(true, 1.0));
        assert!(latch.revealed);
    }

    #[test]
    fn test_hidden_style_sits_below_rest() {
        let style = reveal_style(false, RevealTiming::SECTION);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translateY(20px)"));
        assert!(style.contains("opacity 800ms ease-out 0ms"));
    }

    #[test]
    fn test_revealed_style_is_at_rest() {
        let style = reveal_style(true, RevealTiming::CARD);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("translateY(0px)"));
        assert!(style.contains("transform 500ms ease-out 0ms"));
    }

    #[test]
    fn test_stagger_grows_with_index() {
        let delays: Vec<u32> = (0..3).map(|i| RevealTiming::CARD.staggered(i).delay_ms).collect();
        assert_eq!(delays, vec![0, 200, 400]);
        assert_eq!(RevealTiming::CARD.staggered(2).duration_ms, 500);
    }
}
