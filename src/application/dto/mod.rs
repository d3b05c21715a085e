use crate::domain::entities::Business;
use serde::{Deserialize, Serialize};

const BLOCKS_PER_MILE: f64 = 20.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDto {
    pub name: String,
    pub address: Option<String>,
    pub categories: String,
    pub distance: String,
    pub rating: f32,
    pub reviews: String,
    pub deal: bool,
}

impl From<Business> for BusinessDto {
    fn from(business: Business) -> Self {
        Self {
            name: business.name,
            address: business.address,
            categories: business.categories.join(", "),
            distance: format!("{:.2} mi", business.distance / BLOCKS_PER_MILE),
            rating: business.rating,
            reviews: format!("{} Reviews", business.review_count),
            deal: business.offers_deal,
        }
    }
}
