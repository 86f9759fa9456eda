use std::rc::Rc;

use dioxus::prelude::*;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;

use common::form::{
    ContactMessage, SIMULATED_LATENCY_MS, STATUS_VISIBLE_MS, SUCCESS_MESSAGE, SubmitState,
};

use crate::components::Section;
use crate::content;

// the submission seam.  the form only ever awaits this, so a real client
// can replace the simulation at the App provider without touching the
// wiring below.
pub trait ContactGateway {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'static, anyhow::Result<()>>;
}

/// Stand-in transport that acknowledges after a fixed delay.
pub struct SimulatedGateway;

impl ContactGateway for SimulatedGateway {
    fn submit(&self, _message: ContactMessage) -> LocalBoxFuture<'static, anyhow::Result<()>> {
        Box::pin(async {
            TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
            Ok(())
        })
    }
}

#[component]
pub fn Contact() -> Element {
    let gateway: Rc<dyn ContactGateway> = use_context();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut state = use_signal(SubmitState::default);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        if state.peek().is_sending() {
            return;
        }

        let gateway = gateway.clone();
        let outgoing = ContactMessage {
            name: name.peek().clone(),
            email: email.peek().clone(),
            message: message.peek().clone(),
        };

        spawn(async move {
            state.set(SubmitState::Sending);

            match gateway.submit(outgoing).await {
                Ok(()) => {
                    state.set(SubmitState::Sent);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());

                    TimeoutFuture::new(STATUS_VISIBLE_MS).await;

                    // leave the state alone if another submission started
                    // while the status was up
                    if state.peek().status_visible() {
                        state.set(SubmitState::Idle);
                    }
                }
                Err(err) => {
                    tracing::warn!("contact submission failed: {err}");
                    state.set(SubmitState::Idle);
                }
            }
        });
    };

    let current = state();

    rsx! {
        Section { id: content::CONTACT_ID,
            div { class: "container",
                h2 { class: "section-title", "Start Planning" }

                form { class: "contact-form", onsubmit: on_submit,
                    div { class: "form-group",
                        label { class: "form-label", r#for: "contact-name", "Name" }
                        input {
                            id: "contact-name",
                            class: "form-input",
                            name: "name",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |event| name.set(event.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "contact-email", "Email" }
                        input {
                            id: "contact-email",
                            class: "form-input",
                            name: "email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |event| email.set(event.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "contact-message", "Message" }
                        textarea {
                            id: "contact-message",
                            class: "form-textarea",
                            name: "message",
                            value: "{message}",
                            oninput: move |event| message.set(event.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: current.is_sending(),
                        "{current.button_label()}"
                    }

                    p {
                        class: "form-status",
                        hidden: !current.status_visible(),
                        "{SUCCESS_MESSAGE}"
                    }
                }
            }
        }
    }
}
