use serde::{Deserialize, Serialize};
use std::fmt;

/// How many options of a group may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one option; selecting replaces the current choice.
    Single,
    /// Zero or one option, rendered as an on/off switch.
    Flag,
    /// Any number of options.
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterGroup {
    Deal,
    Sort,
    Distance,
    Category,
}

impl FilterGroup {
    /// Section order of the settings screen.
    pub const ALL: [FilterGroup; 4] = [
        FilterGroup::Deal,
        FilterGroup::Sort,
        FilterGroup::Distance,
        FilterGroup::Category,
    ];

    pub fn index(self) -> usize {
        match self {
            FilterGroup::Deal => 0,
            FilterGroup::Sort => 1,
            FilterGroup::Distance => 2,
            FilterGroup::Category => 3,
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            FilterGroup::Deal => Arity::Flag,
            FilterGroup::Sort | FilterGroup::Distance => Arity::Single,
            FilterGroup::Category => Arity::Multi,
        }
    }

    pub fn is_single_select(self) -> bool {
        self.arity() == Arity::Single
    }

    /// Rows shown while the group is collapsed.
    pub fn visible_row_floor(self) -> usize {
        match self {
            FilterGroup::Category => 4,
            _ => 1,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FilterGroup::Deal => "",
            FilterGroup::Sort => "Sort By",
            FilterGroup::Distance => "Distance",
            FilterGroup::Category => "Category",
        }
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterGroup::Deal => write!(f, "Deal"),
            FilterGroup::Sort => write!(f, "Sort"),
            FilterGroup::Distance => write!(f, "Distance"),
            FilterGroup::Category => write!(f, "Category"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "best_match")]
    BestMatched,
    #[serde(rename = "distance")]
    Distance,
    #[serde(rename = "rating")]
    HighestRated,
}

impl SortMode {
    pub fn code(self) -> &'static str {
        match self {
            SortMode::Auto => "auto",
            SortMode::BestMatched => "best_match",
            SortMode::Distance => "distance",
            SortMode::HighestRated => "rating",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Encoded value of an option, typed per group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionValue {
    Deal,
    Sort(SortMode),
    /// Radius in city blocks; `0.0` means no limit.
    Distance(f64),
    Category(&'static str),
}

impl OptionValue {
    pub fn group(&self) -> FilterGroup {
        match self {
            OptionValue::Deal => FilterGroup::Deal,
            OptionValue::Sort(_) => FilterGroup::Sort,
            OptionValue::Distance(_) => FilterGroup::Distance,
            OptionValue::Category(_) => FilterGroup::Category,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Deal => write!(f, "true"),
            OptionValue::Sort(mode) => write!(f, "{}", mode),
            OptionValue::Distance(blocks) => write!(f, "{}", blocks),
            OptionValue::Category(code) => write!(f, "{}", code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOption {
    pub display_name: &'static str,
    pub value: OptionValue,
}

impl FilterOption {
    pub const fn new(display_name: &'static str, value: OptionValue) -> Self {
        Self {
            display_name,
            value,
        }
    }
}
