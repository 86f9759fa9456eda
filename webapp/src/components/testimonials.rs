use dioxus::prelude::*;

use gloo_timers::callback::Interval;

use common::carousel::{AUTOPLAY_INTERVAL_MS, Carousel};

use crate::components::Section;
use crate::content;

#[component]
pub fn Testimonials() -> Element {
    let testimonials = content::testimonials();
    let slide_count = testimonials.len();

    let mut carousel = use_signal(|| Carousel::new(slide_count));

    // the live autoplay handle.  replacing the stored value drops, and so
    // cancels, the previous timer; at most one is ever ticking.
    let mut autoplay: Signal<Option<Interval>> = use_signal(|| None);

    let mut restart_autoplay = move || {
        autoplay.set(None);

        if carousel.peek().has_autoplay() {
            autoplay.set(Some(Interval::new(AUTOPLAY_INTERVAL_MS, move || {
                carousel.with_mut(|c| c.advance());
            })));
        }
    };

    use_effect(move || restart_autoplay());

    let current = carousel.read().current();

    rsx! {
        Section { id: content::TESTIMONIALS_ID,
            div { class: "container",
                h2 { class: "section-title", "What Travelers Say" }

                div { class: "testimonial-slider",
                    for (index, testimonial) in testimonials.iter().enumerate() {
                        div {
                            class: if index == current { "testimonial-slide active" } else { "testimonial-slide" },
                            blockquote { class: "testimonial-quote", "“{testimonial.quote}”" }
                            p { class: "testimonial-author", "{testimonial.author}" }
                            p { class: "testimonial-role", "{testimonial.role}" }
                        }
                    }
                }

                div {
                    class: "pagination-dots",
                    hidden: slide_count <= 1,
                    for index in 0..slide_count {
                        button {
                            class: if index == current { "dot active" } else { "dot" },
                            aria_label: format!("Go to slide {}", index + 1),
                            onclick: move |_| {
                                carousel.with_mut(|c| c.show(index as isize));
                                // manual navigation restarts the autoplay clock
                                restart_autoplay();
                            },
                        }
                    }
                }
            }
        }
    }
}
