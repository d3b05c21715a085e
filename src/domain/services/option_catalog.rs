use crate::domain::entities::{FilterGroup, FilterOption, OptionValue, SortMode};
use crate::domain::errors::{CatalogError, CatalogResult};

pub const DEAL_OPTION_NAME: &str = "Offering a Deal";
pub const AUTO_OPTION_NAME: &str = "Auto";

const DEALS: &[FilterOption] = &[FilterOption::new(DEAL_OPTION_NAME, OptionValue::Deal)];

const SORTS: &[FilterOption] = &[
    FilterOption::new(AUTO_OPTION_NAME, OptionValue::Sort(SortMode::Auto)),
    FilterOption::new("Best Match", OptionValue::Sort(SortMode::BestMatched)),
    FilterOption::new("Distance", OptionValue::Sort(SortMode::Distance)),
    FilterOption::new("Highest Rated", OptionValue::Sort(SortMode::HighestRated)),
];

// Blocks; twenty to the mile.
const DISTANCES: &[FilterOption] = &[
    FilterOption::new(AUTO_OPTION_NAME, OptionValue::Distance(0.0)),
    FilterOption::new("2 blocks", OptionValue::Distance(2.0)),
    FilterOption::new("6 blocks", OptionValue::Distance(6.0)),
    FilterOption::new("1 mile", OptionValue::Distance(20.0)),
    FilterOption::new("5 miles", OptionValue::Distance(100.0)),
];

const CATEGORIES: &[FilterOption] = &[
    FilterOption::new("American", OptionValue::Category("newamerican")),
    FilterOption::new("Barbeque", OptionValue::Category("bbq")),
    FilterOption::new("Breakfast & Brunch", OptionValue::Category("breakfast_brunch")),
    FilterOption::new("Burgers", OptionValue::Category("burgers")),
    FilterOption::new("Chinese", OptionValue::Category("chinese")),
    FilterOption::new("French", OptionValue::Category("french")),
    FilterOption::new("Indian", OptionValue::Category("indpak")),
    FilterOption::new("Italian", OptionValue::Category("italian")),
    FilterOption::new("Japanese", OptionValue::Category("japanese")),
    FilterOption::new("Korean", OptionValue::Category("korean")),
    FilterOption::new("Mexican", OptionValue::Category("mexican")),
    FilterOption::new("Pizza", OptionValue::Category("pizza")),
    FilterOption::new("Sushi Bars", OptionValue::Category("sushi")),
    FilterOption::new("Thai", OptionValue::Category("thai")),
    FilterOption::new("Vegetarian", OptionValue::Category("vegetarian")),
    FilterOption::new("Vietnamese", OptionValue::Category("vietnamese")),
];

/// Read-only option tables for every filter group.
pub struct OptionCatalog;

impl OptionCatalog {
    pub fn options(group: FilterGroup) -> &'static [FilterOption] {
        match group {
            FilterGroup::Deal => DEALS,
            FilterGroup::Sort => SORTS,
            FilterGroup::Distance => DISTANCES,
            FilterGroup::Category => CATEGORIES,
        }
    }

    pub fn len(group: FilterGroup) -> usize {
        Self::options(group).len()
    }

    pub fn option_at(group: FilterGroup, row: usize) -> Option<&'static FilterOption> {
        Self::options(group).get(row)
    }

    pub fn find_by_name(group: FilterGroup, name: &str) -> Option<&'static FilterOption> {
        Self::options(group)
            .iter()
            .find(|option| option.display_name == name)
    }

    pub fn contains(group: FilterGroup, name: &str) -> bool {
        Self::find_by_name(group, name).is_some()
    }

    pub fn value_of(group: FilterGroup, name: &str) -> CatalogResult<OptionValue> {
        Self::find_by_name(group, name)
            .map(|option| option.value)
            .ok_or_else(|| CatalogError::UnknownName {
                group,
                name: name.to_string(),
            })
    }

    pub fn find_by_value(value: &OptionValue) -> CatalogResult<&'static FilterOption> {
        let group = value.group();
        Self::options(group)
            .iter()
            .find(|option| option.value == *value)
            .ok_or_else(|| CatalogError::UnknownValue {
                group,
                value: value.to_string(),
            })
    }

    pub fn sort_name(mode: SortMode) -> CatalogResult<&'static str> {
        Self::find_by_value(&OptionValue::Sort(mode)).map(|option| option.display_name)
    }

    pub fn distance_name(blocks: f64) -> CatalogResult<&'static str> {
        Self::find_by_value(&OptionValue::Distance(blocks)).map(|option| option.display_name)
    }

    pub fn category_name(code: &str) -> CatalogResult<&'static str> {
        CATEGORIES
            .iter()
            .find(|option| matches!(option.value, OptionValue::Category(known) if known == code))
            .map(|option| option.display_name)
            .ok_or_else(|| CatalogError::UnknownValue {
                group: FilterGroup::Category,
                value: code.to_string(),
            })
    }
}
