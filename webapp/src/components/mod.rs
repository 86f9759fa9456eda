pub mod contact;
pub mod faq;
pub mod hero;
pub mod modal;
pub mod navigation;
pub mod testimonials;
pub mod tours;
pub mod why_us;

use dioxus::prelude::*;

use crate::state::use_app_context;

// Section
//
// shared wrapper for the anchor sections: the id doubles as the nav target
// and the handle the observers look elements up by, and the is-visible
// class arrives once the fade-in observer has seen the section.
#[derive(Clone, PartialEq, Props)]
pub struct SectionProps {
    id: &'static str,
    children: Element,
}

#[component]
pub fn Section(props: SectionProps) -> Element {
    let ctx = use_app_context();
    let visible = ctx.visible_sections.read().contains(props.id);

    rsx! {
        section {
            id: props.id,
            class: if visible { "section is-visible" } else { "section" },
            {props.children}
        }
    }
}
