use dioxus::prelude::*;

use gloo_timers::callback::Timeout;

use common::modal::{CLOSE_TRANSITION_MS, ModalState};
use common::tour::Tour;

use crate::common::dom;
use crate::state::use_app_context;

/// Reveal the overlay for a tour and freeze the page behind it.
pub fn open_tour(mut modal: Signal<ModalState<Tour>>, tour: Tour) {
    modal.write().open(tour);
    dom::lock_body_scroll(true);
}

/// Start the fade-out.  The overlay is only hidden outright once the CSS
/// transition has had time to run; reopening in that window wins.
pub fn close_tour(mut modal: Signal<ModalState<Tour>>) {
    if modal.write().begin_close() {
        dom::lock_body_scroll(false);

        Timeout::new(CLOSE_TRANSITION_MS, move || {
            modal.write().finish_close();
        })
        .forget();
    }
}

#[component]
pub fn TourModal() -> Element {
    let ctx = use_app_context();
    let modal = ctx.modal;

    // escape closes the overlay; the hook stays attached for the page
    // lifetime and checks the open state when the key arrives
    use_effect(move || {
        let result = dom::on_document_keydown(move |event| {
            if event.key() == "Escape" && modal.read().is_open() {
                close_tour(modal);
            }
        });

        if let Err(err) = result {
            tracing::warn!("escape-to-close disabled: {err}");
        }
    });

    let state = modal.read();
    let open = state.is_open();
    let hidden = state.is_hidden();
    let tour = state.content().cloned();
    drop(state);

    rsx! {
        div {
            class: if open { "modal-overlay is-open" } else { "modal-overlay" },
            hidden: hidden,
            // only a click on the backdrop itself lands here; the content
            // swallows its own clicks below
            onclick: move |_| close_tour(modal),

            match tour {
                Some(tour) => rsx! {
                    div { class: "modal-content", onclick: move |event| event.stop_propagation(),
                        button {
                            class: "modal-close",
                            aria_label: "Close tour details",
                            onclick: move |_| close_tour(modal),
                            "×"
                        }
                        img {
                            class: "modal-image",
                            src: "{tour.image}",
                            alt: "Photo of {tour.title}",
                        }
                        div { class: "modal-body",
                            h2 { class: "modal-title", "{tour.title}" }
                            p { class: "modal-price", "{tour.price_line()}" }
                            p { class: "modal-description", "{tour.description}" }
                        }
                        div { class: "modal-footer",
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| close_tour(modal),
                                "Book This Tour"
                            }
                        }
                    }
                },
                None => rsx! {},
            }
        }
    }
}
