use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

/// A snapshot of the window's vertical scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self { offset, document_height, viewport_height }
    }

    /// Fraction of the scrollable range already scrolled, in [0, 1].
    /// A page that doesn't scroll reports 0.
    pub fn progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if !range.is_finite() || !self.offset.is_finite() || range <= 0.0 {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > 0.0
    }

    pub fn read(window: &Window) -> Option<Self> {
        let offset = window.scroll_y().ok()?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let document_height = window
            .document()?
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(viewport_height);
        Some(Self::new(offset, document_height, viewport_height))
    }
}

const LISTENED_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Adds every event in order. On the first failure the events added so far are
/// removed again and the failing event is returned with its error.
fn register_all<E>(
    events: &[&'static str],
    mut add: impl FnMut(&str) -> Result<(), E>,
    mut remove: impl FnMut(&str),
) -> Result<(), (&'static str, E)> {
    for (i, &event) in events.iter().enumerate() {
        if let Err(e) = add(event) {
            events[..i].iter().for_each(|&added| remove(added));
            return Err((event, e));
        }
    }
    Ok(())
}

/// Keeps `scroll` and `resize` listeners registered on the window until dropped.
pub struct ScrollSubscription {
    window: Window,
    listener: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn subscribe(on_change: Callback<ScrollMetrics>) -> Option<Self> {
        let window = web_sys::window()?;
        let window_clone = window.clone();

        let listener = Closure::wrap(Box::new(move || {
            if let Some(metrics) = ScrollMetrics::read(&window_clone) {
                on_change.emit(metrics);
            }
        }) as Box<dyn FnMut()>);

        let registered = register_all(
            &LISTENED_EVENTS,
            |event| window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref()),
            |event| {
                let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            },
        );
        if let Err((event, e)) = registered {
            warn!("Failed to register {} listener: {:?}", event, e);
            return None;
        }

        Some(Self { window, listener })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        for event in LISTENED_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref());
        }
    }
}

/// Calls `on_change` with the current metrics on mount and on every scroll or
/// resize until the component unmounts.
#[hook]
pub fn use_scroll_subscription(on_change: Callback<ScrollMetrics>) {
    use_effect_with_deps(
        move |_| {
            if let Some(metrics) = web_sys::window().as_ref().and_then(ScrollMetrics::read) {
                on_change.emit(metrics);
            }
            let subscription = ScrollSubscription::subscribe(on_change);
            move || drop(subscription)
        },
        (),
    );
}

#[hook]
pub fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state(ScrollMetrics::default);
    {
        let metrics = metrics.clone();
        use_scroll_subscription(Callback::from(move |m: ScrollMetrics| metrics.set(m)));
    }
    *metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_zero_at_top_and_one_at_bottom() {
        assert_eq!(ScrollMetrics::new(0.0, 3200.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(2400.0, 3200.0, 800.0).progress(), 1.0);
    }

    #[test]
    fn test_progress_halfway() {
        let metrics = ScrollMetrics::new(1200.0, 3200.0, 800.0);
        assert!((metrics.progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_is_clamped() {
        // Overscroll bounce on touch devices reports offsets outside the range
        assert_eq!(ScrollMetrics::new(-40.0, 3200.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(2600.0, 3200.0, 800.0).progress(), 1.0);
    }

    #[test]
    fn test_progress_without_scrollable_range() {
        assert_eq!(ScrollMetrics::new(0.0, 800.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(10.0, 600.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(f64::NAN, 3200.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::default().progress(), 0.0);
    }

    #[test]
    fn test_progress_stays_in_range_for_many_layouts() {
        for document_height in [0.0, 400.0, 800.0, 801.0, 1600.0, 10_000.0] {
            for viewport_height in [0.0, 320.0, 800.0, 1080.0] {
                for offset in [0.0, 1.0, 250.0, 799.0, 5_000.0] {
                    let p = ScrollMetrics::new(offset, document_height, viewport_height).progress();
                    assert!((0.0..=1.0).contains(&p), "{} out of range", p);
                }
            }
        }
    }

    #[test]
    fn test_register_all_adds_every_event() {
        let mut added = Vec::new();
        let result: Result<(), (&str, ())> =
            register_all(&LISTENED_EVENTS, |e| Ok(added.push(e.to_string())), |_| panic!("nothing to undo"));
        assert!(result.is_ok());
        assert_eq!(added, vec!["scroll", "resize"]);
    }

    #[test]
    fn test_register_all_undoes_earlier_events_on_failure() {
        let mut removed = Vec::new();
        let result = register_all(
            &LISTENED_EVENTS,
            |e| if e == "resize" { Err("blocked") } else { Ok(()) },
            |e| removed.push(e.to_string()),
        );
        assert_eq!(result, Err(("resize", "blocked")));
        assert_eq!(removed, vec!["scroll"]);
    }

    #[test]
    fn test_is_scrolled_only_past_top() {
        assert!(!ScrollMetrics::new(0.0, 3200.0, 800.0).is_scrolled());
        assert!(ScrollMetrics::new(0.5, 3200.0, 800.0).is_scrolled());
    }
}
