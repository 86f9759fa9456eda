use dioxus::prelude::*;

use common::tour::FaqEntry;

use crate::common::dom;
use crate::components::Section;
use crate::content;

#[component]
pub fn Faq() -> Element {
    rsx! {
        Section { id: content::FAQ_ID,
            div { class: "container",
                h2 { class: "section-title", "Frequently Asked Questions" }

                div { class: "faq-container",
                    for (index, entry) in content::faq().into_iter().enumerate() {
                        FaqItem { index: index, entry: entry }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FaqItemProps {
    index: usize,
    entry: FaqEntry,
}

// each panel toggles on its own; several can be open at once
#[component]
fn FaqItem(props: FaqItemProps) -> Element {
    let mut expanded = use_signal(|| false);

    // panels animate via max-height, so the open height is measured from
    // the rendered answer at toggle time
    let mut max_height = use_signal(|| String::from("0px"));

    let answer_id = format!("faq-answer-{}", props.index);
    let measured_id = answer_id.clone();

    rsx! {
        div { class: "faq-item",
            button {
                class: "faq-question",
                aria_expanded: expanded(),
                onclick: move |_| {
                    let now_expanded = !expanded();
                    expanded.set(now_expanded);

                    if now_expanded {
                        match dom::scroll_height(&measured_id) {
                            Some(height) => max_height.set(format!("{height}px")),
                            None => max_height.set("none".into()),
                        }
                    } else {
                        max_height.set("0px".into());
                    }
                },
                span { "{props.entry.question}" }
                span { class: "faq-chevron", if expanded() { "−" } else { "+" } }
            }
            div {
                id: "{answer_id}",
                class: "faq-answer",
                style: "max-height: {max_height};",
                p { "{props.entry.answer}" }
            }
        }
    }
}
