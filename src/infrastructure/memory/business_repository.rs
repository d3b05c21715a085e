use crate::domain::{
    entities::{Business, SettingsRecord, SortMode},
    repositories::BusinessRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use std::cmp::Ordering;

/// Search collaborator backed by a fixed list of businesses.
pub struct InMemoryBusinessRepository {
    businesses: Vec<Business>,
}

impl InMemoryBusinessRepository {
    pub fn new(businesses: Vec<Business>) -> Self {
        Self { businesses }
    }

    pub fn with_sample_data() -> Self {
        Self::new(sample_businesses())
    }

    fn matches(business: &Business, settings: &SettingsRecord) -> bool {
        if let Some(term) = settings.term.as_deref() {
            if !business.matches_term(term) {
                return false;
            }
        }

        if settings.wants_deals() && !business.offers_deal {
            return false;
        }

        // Zero is the "Auto" radius.
        if let Some(radius) = settings.distance.filter(|radius| *radius > 0.0) {
            if business.distance > radius {
                return false;
            }
        }

        let categories = settings.categories();
        categories.is_empty() || business.has_any_category(categories)
    }

    fn sort(businesses: &mut [Business], mode: SortMode) {
        match mode {
            SortMode::Auto | SortMode::BestMatched => {}
            SortMode::Distance => businesses.sort_by(|a, b| {
                a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal)
            }),
            SortMode::HighestRated => businesses.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(Ordering::Equal)
                    .then(b.review_count.cmp(&a.review_count))
            }),
        }
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn search(&self, settings: &SettingsRecord) -> Result<Vec<Business>> {
        let mut results: Vec<Business> = self
            .businesses
            .iter()
            .filter(|business| Self::matches(business, settings))
            .cloned()
            .collect();
        Self::sort(&mut results, settings.sort.unwrap_or_default());

        tracing::debug!(
            "In-memory search matched {} of {} businesses",
            results.len(),
            self.businesses.len()
        );
        Ok(results)
    }
}

fn sample_businesses() -> Vec<Business> {
    vec![
        Business::new("Tacolicious", 4.0)
            .with_address("741 Valencia St, Mission")
            .with_category("mexican")
            .with_rating(4.0, 1210)
            .set_offers_deal(true),
        Business::new("Delfina", 9.0)
            .with_address("3621 18th St, Mission")
            .with_category("italian")
            .with_rating(4.5, 2330),
        Business::new("Pizzeria Delfina", 9.5)
            .with_address("3611 18th St, Mission")
            .with_category("pizza")
            .with_category("italian")
            .with_rating(4.0, 1840)
            .set_offers_deal(true),
        Business::new("La Taqueria", 1.5)
            .with_address("2889 Mission St, Mission")
            .with_category("mexican")
            .with_rating(4.5, 4020),
        Business::new("Burma Love", 6.0)
            .with_address("211 Valencia St, Mission")
            .with_category("burmese")
            .with_rating(4.0, 1560),
        Business::new("Zazie", 35.0)
            .with_address("941 Cole St, Cole Valley")
            .with_category("french")
            .with_category("breakfast_brunch")
            .with_rating(4.0, 3120),
        Business::new("Kitchen Story", 24.0)
            .with_address("3499 16th St, Castro")
            .with_category("breakfast_brunch")
            .with_category("thai")
            .with_rating(4.0, 3800)
            .set_offers_deal(true),
        Business::new("Burma Superstar", 60.0)
            .with_address("309 Clement St, Inner Richmond")
            .with_category("burmese")
            .with_rating(4.0, 6400),
        Business::new("Super Duper Burgers", 2.0)
            .with_address("2304 Market St, Castro")
            .with_category("burgers")
            .with_rating(3.5, 1900),
        Business::new("Kin Khao", 30.0)
            .with_address("55 Cyril Magnin St, Union Square")
            .with_category("thai")
            .with_rating(4.0, 1500),
        Business::new("Sushi Ran", 140.0)
            .with_address("107 Caledonia St, Sausalito")
            .with_category("sushi")
            .with_category("japanese")
            .with_rating(4.5, 2200),
        Business::new("Brenda's French Soul Food", 28.0)
            .with_address("652 Polk St, Tenderloin")
            .with_category("breakfast_brunch")
            .with_category("newamerican")
            .with_rating(4.0, 5600)
            .set_offers_deal(true),
    ]
}
