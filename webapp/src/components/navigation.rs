use dioxus::prelude::*;

use crate::common::dom;
use crate::content;
use crate::state::use_app_context;

/// Scroll offset past which the bar takes its solid style.
const NAV_SCROLLED_OFFSET: f64 = 50.0;

/// Scroll offset past which the back-to-top control shows.
const BACK_TO_TOP_OFFSET: f64 = 300.0;

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    id: &'static str,
    label: &'static str,
    on_activate: EventHandler<()>,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let ctx = use_app_context();
    let active = ctx.active_section.read().as_deref() == Some(props.id);
    let on_activate = props.on_activate;

    rsx! {
        a {
            class: if active { "nav-link active-link" } else { "nav-link" },
            href: "#{props.id}",
            onclick: move |_| on_activate.call(()),
            "{props.label}"
        }
    }
}

#[component]
fn ThemeSwitch() -> Element {
    let ctx = use_app_context();
    let mut theme = ctx.theme;
    let dark = theme.read().is_dark();

    rsx! {
        button {
            class: "theme-switch",
            role: "switch",
            aria_checked: dark,
            aria_label: "Toggle dark mode",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
            },
            if dark { "☾" } else { "☀" }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let ctx = use_app_context();
    let mut menu_open = use_signal(|| false);

    let scrolled = *ctx.scroll_y.read() > NAV_SCROLLED_OFFSET;

    // one path flips everything the open state touches, so closing from a
    // link click behaves exactly like the toggle button
    let mut toggle_menu = move || {
        let open = !menu_open();
        menu_open.set(open);
        dom::lock_body_scroll(open);
    };

    rsx! {
        nav {
            class: if scrolled { "site-nav nav-scrolled" } else { "site-nav" },
            div { class: "nav-container",
                a { class: "logo", href: "#{content::HOME_ID}", "Wayfarer Tours" }

                div {
                    class: if menu_open() { "nav-links nav-open" } else { "nav-links" },
                    for (id, label) in content::NAV_SECTIONS.iter().copied() {
                        NavLink {
                            id: id,
                            label: label,
                            on_activate: move |_| {
                                // picking a destination collapses the mobile menu
                                if menu_open() {
                                    toggle_menu();
                                }
                            },
                        }
                    }
                }

                div { class: "nav-actions",
                    ThemeSwitch {}
                    button {
                        class: "nav-toggle",
                        aria_expanded: menu_open(),
                        aria_label: "Toggle navigation menu",
                        onclick: move |_| toggle_menu(),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BackToTop() -> Element {
    let ctx = use_app_context();
    let visible = *ctx.scroll_y.read() > BACK_TO_TOP_OFFSET;

    rsx! {
        button {
            class: if visible { "back-to-top visible" } else { "back-to-top" },
            aria_label: "Back to top",
            onclick: move |_| dom::smooth_scroll_to_top(),
            "↑"
        }
    }
}
