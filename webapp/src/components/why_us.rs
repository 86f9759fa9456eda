use dioxus::prelude::*;

use gloo_timers::future::TimeoutFuture;

use common::counter::{CounterAnimation, TICK_MS, format_grouped};
use common::tour::Stat;

use crate::components::Section;
use crate::content;
use crate::state::use_app_context;

#[component]
pub fn WhyUs() -> Element {
    rsx! {
        Section { id: content::WHY_US_ID,
            div { class: "container",
                h2 { class: "section-title", "Why Travel With Us" }
                p { class: "section-subtitle",
                    "Two decades of journeys, and the numbers to show for it."
                }

                div { class: "stats-grid",
                    for stat in content::stats() {
                        StatCounter { stat: stat }
                    }
                }

                div { class: "features-grid",
                    div { class: "feature-card",
                        h3 { class: "feature-title", "Local Guides" }
                        p { class: "feature-desc",
                            "Every departure is led by someone who grew up where you are going."
                        }
                    }
                    div { class: "feature-card",
                        h3 { class: "feature-title", "Small Groups" }
                        p { class: "feature-desc",
                            "Twelve travelers at most, so no megaphones and no head counts."
                        }
                    }
                    div { class: "feature-card",
                        h3 { class: "feature-title", "Flexible Booking" }
                        p { class: "feature-desc",
                            "Move your dates up to 30 days out without fees or paperwork."
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct StatCounterProps {
    stat: Stat,
}

#[component]
fn StatCounter(props: StatCounterProps) -> Element {
    let ctx = use_app_context();
    let target = props.stat.target;

    let mut display = use_signal(|| String::from("0"));

    // once per element, ever; re-entering the viewport does not replay
    let mut animated = use_signal(|| false);

    use_effect(move || {
        let section_visible = ctx.visible_sections.read().contains(content::WHY_US_ID);
        if !section_visible || animated() {
            return;
        }
        animated.set(true);

        spawn(async move {
            let mut animation = CounterAnimation::new(target);

            while let Some(value) = animation.step() {
                display.set(value.to_string());
                TimeoutFuture::new(TICK_MS).await;
            }

            // snap to the exact target with locale-style grouping
            display.set(format_grouped(target));
        });
    });

    rsx! {
        div { class: "stat-card",
            span { class: "stat-value", "{display}" }
            span { class: "stat-label", "{props.stat.label}" }
        }
    }
}
