// TourFilter
//
// the grid shows a card when the selected filter is All or matches the
// card's category tag exactly.  tags are free-form strings shared between
// the filter buttons and the cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourFilter {
    All,
    Category(String),
}

impl TourFilter {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "all" => TourFilter::All,
            other => TourFilter::Category(other.to_owned()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            TourFilter::All => "all",
            TourFilter::Category(tag) => tag,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            TourFilter::All => true,
            TourFilter::Category(tag) => tag == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_category() {
        assert!(TourFilter::All.matches("adventure"));
        assert!(TourFilter::All.matches(""));
    }

    #[test]
    fn category_matches_only_its_own_tag() {
        let filter = TourFilter::parse("cultural");

        assert!(filter.matches("cultural"));
        assert!(!filter.matches("adventure"));
        assert!(!filter.matches("cultural "));
    }

    #[test]
    fn parse_round_trips_through_tag() {
        for tag in ["all", "adventure", "nature"] {
            assert_eq!(TourFilter::parse(tag).tag(), tag);
        }
    }
}
