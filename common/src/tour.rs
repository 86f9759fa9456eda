// the page content types, rendered by the webapp and displayed verbatim
//
// categories are free-form tags that must line up with the filter buttons
// built from them; there is no registry beyond that

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    pub title: String,
    pub location: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub category: String,
}

impl Tour {
    /// Location and price line shown under the modal title.
    pub fn price_line(&self) -> String {
        format!("{} · {}", self.location, self.price)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: String,
    pub target: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_line_joins_location_and_price() {
        let tour = Tour {
            title: "Desert Safari".into(),
            location: "Dubai".into(),
            price: "$199".into(),
            image: "x.jpg".into(),
            description: "Dunes at dusk".into(),
            category: "adventure".into(),
        };

        assert_eq!(tour.price_line(), "Dubai · $199");
    }
}
