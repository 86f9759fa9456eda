use dioxus::prelude::*;

use common::filter::TourFilter;
use common::tour::Tour;

use crate::components::Section;
use crate::components::modal::open_tour;
use crate::content;
use crate::state::use_app_context;

#[component]
pub fn Tours() -> Element {
    // the signal starts on All, so exactly one button is active from the
    // first render on
    let filter = use_signal(|| TourFilter::All);

    rsx! {
        Section { id: content::TOURS_ID,
            div { class: "container",
                h2 { class: "section-title", "Featured Tours" }

                div { class: "tour-filters",
                    for tag in content::filter_tags() {
                        FilterButton { tag: tag, filter: filter }
                    }
                }

                div { class: "tours-grid",
                    for tour in content::tours() {
                        TourCard { tour: tour, filter: filter }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FilterButtonProps {
    tag: String,
    filter: Signal<TourFilter>,
}

#[component]
fn FilterButton(props: FilterButtonProps) -> Element {
    let mut filter = props.filter;
    let this = TourFilter::parse(&props.tag);
    let active = *filter.read() == this;
    let label = tag_label(&props.tag);

    rsx! {
        button {
            class: if active { "filter-btn active" } else { "filter-btn" },
            onclick: move |_| filter.set(this.clone()),
            "{label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TourCardProps {
    tour: Tour,
    filter: Signal<TourFilter>,
}

#[component]
fn TourCard(props: TourCardProps) -> Element {
    let ctx = use_app_context();
    let hidden = !props.filter.read().matches(&props.tour.category);
    let tour = props.tour.clone();

    rsx! {
        div {
            class: if hidden { "tour-card hidden" } else { "tour-card" },
            onclick: move |_| open_tour(ctx.modal, tour.clone()),
            div { class: "tour-card-image",
                img {
                    src: "{props.tour.image}",
                    alt: "Photo of {props.tour.title}",
                    loading: "lazy",
                }
                span { class: "tour-card-category", "{tag_label(&props.tour.category)}" }
            }
            div { class: "tour-card-info",
                h3 { class: "tour-card-title", "{props.tour.title}" }
                p { class: "tour-card-meta", "{props.tour.price_line()}" }
            }
        }
    }
}

/// Button and badge text for a category tag.
fn tag_label(tag: &str) -> String {
    let mut chars = tag.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::tag_label;

    #[test]
    fn tag_labels_are_capitalized() {
        assert_eq!(tag_label("all"), "All");
        assert_eq!(tag_label("adventure"), "Adventure");
        assert_eq!(tag_label(""), "");
    }
}
