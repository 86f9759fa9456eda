#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;

use tracing::Level;

mod common;

mod content;

mod state;
use state::AppContext;

mod components;
use components::contact::{Contact, ContactGateway, SimulatedGateway};
use components::faq::Faq;
use components::hero::Hero;
use components::modal::TourModal;
use components::navigation::{BackToTop, NavBar};
use components::testimonials::Testimonials;
use components::tours::Tours;
use components::why_us::WhyUs;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let ctx = AppContext::provide();

    // the contact form only ever awaits this seam, so a real client can be
    // swapped in here without touching the form wiring
    use_context_provider::<Rc<dyn ContactGateway>>(|| Rc::new(SimulatedGateway));

    // re-applies (and persists) the preference whenever the switch flips
    use_effect(move || common::theme::apply((ctx.theme)()));

    // document-level wiring, once the sections exist in the DOM
    use_effect(move || {
        if let Err(err) = common::dom::track_scroll(ctx.scroll_y) {
            tracing::warn!("scroll effects disabled: {err}");
        }
        if let Err(err) = common::observer::wire_fade_in(ctx.visible_sections) {
            tracing::warn!("fade-in animation disabled: {err}");
        }
        if let Err(err) = common::observer::wire_nav_highlight(ctx.active_section) {
            tracing::warn!("nav highlighting disabled: {err}");
        }
    });

    rsx! {
        style { "{common::style::BASE_STYLES}" }
        style { "{common::style::PAGE_STYLES}" }

        NavBar {}

        Hero {}

        main {
            Tours {}
            WhyUs {}
            Testimonials {}
            Faq {}
            Contact {}
        }

        footer { class: "site-footer",
            div { class: "container",
                p { "Wayfarer Tours · Small-group journeys, led by locals" }
            }
        }

        BackToTop {}
        TourModal {}
    }
}
