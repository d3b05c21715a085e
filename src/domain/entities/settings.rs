use super::SortMode;
use serde::{Deserialize, Serialize};

/// Search filters as exchanged with the search collaborator.
///
/// Every field is optional; an absent field lets the search side apply its
/// own default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deals: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl SettingsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_deals(mut self, deals: bool) -> Self {
        self.deals = Some(deals);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn wants_deals(&self) -> bool {
        self.deals.unwrap_or(false)
    }

    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let record = SettingsRecord::new().with_sort(SortMode::Distance);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"sort":"distance"}"#);
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let record: SettingsRecord = serde_json::from_str(r#"{"deals":true}"#).unwrap();
        assert_eq!(record.deals, Some(true));
        assert!(record.term.is_none());
        assert!(record.categories().is_empty());
    }
}
