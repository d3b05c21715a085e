use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    pub address: Option<String>,
    pub categories: Vec<String>,
    /// Distance from the user in city blocks.
    pub distance: f64,
    pub rating: f32,
    pub review_count: u32,
    pub offers_deal: bool,
}

impl Business {
    pub fn new(name: impl Into<String>, distance: f64) -> Self {
        Self {
            name: name.into(),
            address: None,
            categories: Vec::new(),
            distance,
            rating: 0.0,
            review_count: 0,
            offers_deal: false,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_category(mut self, code: impl Into<String>) -> Self {
        self.categories.push(code.into());
        self
    }

    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn set_offers_deal(mut self, offers_deal: bool) -> Self {
        self.offers_deal = offers_deal;
        self
    }

    pub fn has_any_category(&self, codes: &[String]) -> bool {
        self.categories.iter().any(|code| codes.contains(code))
    }

    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.categories.iter().any(|code| code.contains(&needle))
    }
}
