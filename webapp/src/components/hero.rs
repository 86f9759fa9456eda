use dioxus::prelude::*;

use crate::common::dom;
use crate::content;

/// Maximum tilt applied to the header content, in degrees.
const MAX_TILT_DEG: f64 = 15.0;

// the background moves at half the content's rotation, which is what sells
// the depth; both transforms reset smoothly when the pointer leaves
#[component]
pub fn Hero() -> Element {
    // the tilt follows the pointer, so it is disabled on touch devices
    let coarse_pointer = use_hook(|| dom::media_query_matches("(pointer: coarse)"));

    let mut content_transform =
        use_signal(|| String::from("rotateX(0) rotateY(0) translateZ(0)"));
    let mut background_transform = use_signal(|| String::from("scale(1.1) rotateX(0) rotateY(0)"));

    rsx! {
        header {
            id: content::HOME_ID,
            class: "hero",
            onmousemove: move |event| {
                if coarse_pointer {
                    return;
                }
                let Some((width, height)) = dom::element_size(content::HOME_ID) else {
                    return;
                };

                let point = event.client_coordinates();
                let y_rotation = MAX_TILT_DEG * ((point.x - width / 2.0) / width);
                let x_rotation = -MAX_TILT_DEG * ((point.y - height / 2.0) / height);

                content_transform.set(format!(
                    "rotateX({x_rotation}deg) rotateY({y_rotation}deg) translateZ(50px)"
                ));
                background_transform.set(format!(
                    "scale(1.1) rotateX({}deg) rotateY({}deg)",
                    x_rotation * 0.5,
                    y_rotation * 0.5
                ));
            },
            onmouseleave: move |_| {
                content_transform.set("rotateX(0) rotateY(0) translateZ(0)".into());
                background_transform.set("scale(1.1) rotateX(0) rotateY(0)".into());
            },

            div { class: "hero-background", style: "transform: {background_transform};" }
            div { class: "hero-content", style: "transform: {content_transform};",
                h1 { class: "hero-title", "Wander further" }
                p { class: "hero-subtitle",
                    "Small-group tours across six continents, led by locals who know the way."
                }
                div { class: "hero-actions",
                    a { href: "#{content::TOURS_ID}", class: "btn btn-primary btn-lg", "Browse Tours" }
                    a { href: "#{content::CONTACT_ID}", class: "btn btn-secondary btn-lg", "Plan a Trip" }
                }
            }
        }
    }
}
