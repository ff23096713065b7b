use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{BRAND, CONTACT_HREF, NAV_ITEMS};
use crate::scroll::{use_scroll_subscription, ScrollMetrics};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderAction {
    /// Latest scroll state of the page.
    Scrolled(ScrollMetrics),
    ToggleMenu,
    /// A navigation link was activated.
    Navigate,
}

impl HeaderState {
    pub fn apply(self, action: HeaderAction) -> Self {
        match action {
            HeaderAction::Scrolled(metrics) => Self { scrolled: metrics.is_scrolled(), ..self },
            HeaderAction::ToggleMenu => Self { menu_open: !self.menu_open, ..self },
            HeaderAction::Navigate => Self { menu_open: false, ..self },
        }
    }
}

impl Reducible for HeaderState {
    type Action = HeaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let state = use_reducer(HeaderState::default);

    {
        let dispatcher = state.dispatcher();
        use_scroll_subscription(Callback::from(move |metrics: ScrollMetrics| {
            dispatcher.dispatch(HeaderAction::Scrolled(metrics));
        }));
    }

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(HeaderAction::ToggleMenu);
        })
    };

    // Anchors keep their default jump, the menu just closes behind them.
    let close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(HeaderAction::Navigate))
    };

    let nav_links = |class: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|item| {
                html! {
                    <a key={item.anchor} href={item.href()} class={class} onclick={close_menu.clone()}>
                        {item.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("site-header", state.scrolled.then(|| "scrolled"))}>
            <nav class="header-content">
                <div class="header-bar">
                    <a href="#home" class="header-logo" onclick={close_menu.clone()}>{BRAND}</a>

                    <div class="header-links">
                        { nav_links("header-link") }
                        <a href={CONTACT_HREF} class="quote-button" onclick={close_menu.clone()}>
                            {"Get a Quote"}
                        </a>
                    </div>

                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded={state.menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        if state.menu_open {
                            <Icon kind={IconKind::Close} />
                        } else {
                            <Icon kind={IconKind::Menu} />
                        }
                    </button>
                </div>

                if state.menu_open {
                    <div class="mobile-menu">
                        { nav_links("mobile-link") }
                    </div>
                }
            </nav>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(163, 191, 217, 0.95);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }
                .header-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #fff;
                    text-decoration: none;
                }
                .header-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .header-link {
                    color: #fff;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .header-link:hover {
                    color: #FFD7B5;
                }
                .quote-button {
                    background: #FFD7B5;
                    color: #1f2937;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .quote-button:hover {
                    background: #FFE7D5;
                }
                .menu-toggle {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                }
                .mobile-menu {
                    margin-top: 1rem;
                    background: #fff;
                    border-radius: 0.5rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    padding: 1rem;
                }
                .mobile-link {
                    display: block;
                    padding: 0.5rem 0;
                    color: #1f2937;
                    text-decoration: none;
                }
                .mobile-link:hover {
                    color: #A3BFD9;
                }
                @media (max-width: 768px) {
                    .header-links {
                        display: none;
                    }
                    .menu-toggle {
                        display: block;
                    }
                }
                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: f64) -> HeaderAction {
        HeaderAction::Scrolled(ScrollMetrics::new(offset, 3200.0, 800.0))
    }

    #[test]
    fn test_initial_state_is_top_and_closed() {
        let state = HeaderState::default();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_offset_drives_background() {
        let state = HeaderState::default().apply(at(1.0));
        assert!(state.scrolled);
        let state = state.apply(at(350.0));
        assert!(state.scrolled);
        let state = state.apply(at(0.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn test_toggle_flips_menu() {
        let state = HeaderState::default().apply(HeaderAction::ToggleMenu);
        assert!(state.menu_open);
        let state = state.apply(HeaderAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_navigating_closes_open_menu() {
        // open the menu, then tap "Services"
        let state = HeaderState::default()
            .apply(HeaderAction::ToggleMenu)
            .apply(HeaderAction::Navigate);
        assert!(!state.menu_open);
        // a closed menu stays closed
        assert!(!state.apply(HeaderAction::Navigate).menu_open);
    }

    #[test]
    fn test_scrolling_leaves_menu_alone() {
        let state = HeaderState::default()
            .apply(HeaderAction::ToggleMenu)
            .apply(at(200.0));
        assert_eq!(state, HeaderState { scrolled: true, menu_open: true });
    }

    #[test]
    fn test_reduce_keeps_same_rc_when_unchanged() {
        let state = Rc::new(HeaderState::default());
        let next = state.clone().reduce(at(0.0));
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(HeaderAction::ToggleMenu);
        assert!(next.menu_open);
    }
}
