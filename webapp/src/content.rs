// everything the page displays: section anchors, the tour catalog, the
// stats, the testimonials, and the FAQ copy

use common::tour::{FaqEntry, Stat, Testimonial, Tour};

pub const HOME_ID: &str = "home";
pub const TOURS_ID: &str = "tours";
pub const WHY_US_ID: &str = "why-us";
pub const TESTIMONIALS_ID: &str = "testimonials";
pub const FAQ_ID: &str = "faq";
pub const CONTACT_ID: &str = "contact";

/// Sections the fade-in observer watches, in page order.
pub const FADE_SECTION_IDS: &[&str] =
    &[TOURS_ID, WHY_US_ID, TESTIMONIALS_ID, FAQ_ID, CONTACT_ID];

/// Anchors the nav links point at, header included; the highlight observer
/// watches all of them.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    (HOME_ID, "Home"),
    (TOURS_ID, "Tours"),
    (WHY_US_ID, "Why Us"),
    (TESTIMONIALS_ID, "Testimonials"),
    (FAQ_ID, "FAQ"),
    (CONTACT_ID, "Contact"),
];

pub fn tours() -> Vec<Tour> {
    vec![
        Tour {
            title: "Desert Safari".into(),
            location: "Dubai".into(),
            price: "$199".into(),
            image: "/assets/tours/desert-safari.jpg".into(),
            description: "Race over golden dunes at sunset, share a Bedouin-style dinner \
                          under the stars, and watch the desert sky come alive."
                .into(),
            category: "adventure".into(),
        },
        Tour {
            title: "Kyoto Temple Walk".into(),
            location: "Kyoto".into(),
            price: "$249".into(),
            image: "/assets/tours/kyoto-temples.jpg".into(),
            description: "Five centuries of gardens, shrines, and tea houses on foot, \
                          finishing with a private calligraphy lesson in Gion."
                .into(),
            category: "cultural".into(),
        },
        Tour {
            title: "Machu Picchu Trek".into(),
            location: "Cusco".into(),
            price: "$499".into(),
            image: "/assets/tours/machu-picchu.jpg".into(),
            description: "Four days on the Inca Trail with porters, cooks, and a sunrise \
                          arrival at the Sun Gate ahead of the crowds."
                .into(),
            category: "adventure".into(),
        },
        Tour {
            title: "Amalfi Coast Sail".into(),
            location: "Amalfi".into(),
            price: "$329".into(),
            image: "/assets/tours/amalfi-sail.jpg".into(),
            description: "A day under sail between Positano and Ravello, with lemon-grove \
                          lunches and swim stops in hidden coves."
                .into(),
            category: "nature".into(),
        },
        Tour {
            title: "Louvre After Hours".into(),
            location: "Paris".into(),
            price: "$159".into(),
            image: "/assets/tours/louvre-night.jpg".into(),
            description: "A curator-led evening through the galleries after the doors \
                          close, from the Winged Victory to the Dutch masters."
                .into(),
            category: "cultural".into(),
        },
        Tour {
            title: "Northern Lights Chase".into(),
            location: "Tromsø".into(),
            price: "$389".into(),
            image: "/assets/tours/northern-lights.jpg".into(),
            description: "Small-convoy aurora hunting above the Arctic Circle with a \
                          photographer guide and thermal suits provided."
                .into(),
            category: "nature".into(),
        },
    ]
}

/// Filter buttons in display order: "all" first, then each category tag as
/// it first appears in the catalog.
pub fn filter_tags() -> Vec<String> {
    let mut tags = vec!["all".to_owned()];

    for tour in tours() {
        if !tags.contains(&tour.category) {
            tags.push(tour.category);
        }
    }

    tags
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            label: "Happy Travelers".into(),
            target: 12_500,
        },
        Stat {
            label: "Tours Completed".into(),
            target: 870,
        },
        Stat {
            label: "Destinations".into(),
            target: 48,
        },
        Stat {
            label: "Five-Star Reviews".into(),
            target: 4_300,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "The safari was the best evening of our honeymoon. Our guide knew \
                    every dune and exactly when to stop for photographs."
                .into(),
            author: "Amira Hassan".into(),
            role: "Traveled to Dubai".into(),
        },
        Testimonial {
            quote: "I have done group tours before, but never one where the pace felt \
                    this personal. Eight people, no megaphones, no rush."
                .into(),
            author: "Jonas Keller".into(),
            role: "Traveled to Kyoto".into(),
        },
        Testimonial {
            quote: "They handled permits, porters, and altitude days so all we had to \
                    do was walk. Sunrise at the Sun Gate was worth every step."
                .into(),
            author: "Priya Natarajan".into(),
            role: "Traveled to Cusco".into(),
        },
    ]
}

pub fn faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How large are the groups?".into(),
            answer: "Never more than twelve travelers. Most departures run with six \
                     to eight, plus a local lead guide."
                .into(),
        },
        FaqEntry {
            question: "What is included in the price?".into(),
            answer: "Accommodation, listed activities, entrance fees, and most meals. \
                     International flights are not included."
                .into(),
        },
        FaqEntry {
            question: "Can I book a private departure?".into(),
            answer: "Yes. Any itinerary can run privately for groups of four or more; \
                     use the contact form and we will price it for your dates."
                .into(),
        },
        FaqEntry {
            question: "What is the cancellation policy?".into(),
            answer: "Full refund up to 30 days before departure, 50% up to 14 days, \
                     and credit toward a future tour after that."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_tags_lead_with_all_and_cover_every_category() {
        let tags = filter_tags();

        assert_eq!(tags.first().map(String::as_str), Some("all"));

        for tour in tours() {
            assert!(tags.contains(&tour.category), "missing {}", tour.category);
        }
    }

    #[test]
    fn filter_tags_contain_no_duplicates() {
        let tags = filter_tags();

        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();

        assert_eq!(sorted.len(), tags.len());
    }

    #[test]
    fn fade_sections_are_nav_targets() {
        for id in FADE_SECTION_IDS {
            assert!(NAV_SECTIONS.iter().any(|(nav_id, _)| nav_id == id));
        }
    }
}
