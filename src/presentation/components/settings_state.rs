use crate::domain::entities::{Arity, FilterGroup, OptionValue, SettingsRecord};
use crate::domain::errors::CatalogResult;
use crate::domain::services::{AUTO_OPTION_NAME, DEAL_OPTION_NAME, OptionCatalog};
use std::collections::HashSet;

const SEE_ALL_LABEL: &str = "See All";

/// Selection and disclosure state of one filter group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupState {
    group: FilterGroup,
    selected: HashSet<String>,
    visible_row_floor: usize,
    expanded: bool,
}

impl GroupState {
    fn new(group: FilterGroup, selected: HashSet<String>) -> Self {
        Self {
            group,
            selected,
            visible_row_floor: group.visible_row_floor(),
            expanded: false,
        }
    }

    pub fn group(&self) -> FilterGroup {
        self.group
    }

    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn visible_row_floor(&self) -> usize {
        self.visible_row_floor
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The only selected name, if exactly one is selected.
    fn sole_selection(&self) -> Option<&str> {
        if self.selected.len() == 1 {
            self.selected.iter().next().map(String::as_str)
        } else {
            None
        }
    }
}

/// Working copy of the search filters while the settings screen is open.
///
/// Built from a [`SettingsRecord`] with [`SearchSettingsState::decode`],
/// mutated by [`toggle`](Self::toggle) and [`expand`](Self::expand), and
/// turned back into a record with [`compile`](Self::compile).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettingsState {
    term: Option<String>,
    groups: Vec<GroupState>,
}

impl SearchSettingsState {
    pub fn decode(record: &SettingsRecord) -> Self {
        let mut deal = HashSet::new();
        if record.wants_deals() {
            deal.insert(DEAL_OPTION_NAME.to_string());
        }

        let sort_mode = record.sort.unwrap_or_default();
        let sort = collect_known(
            FilterGroup::Sort,
            [OptionCatalog::sort_name(sort_mode)],
        );

        let distance = match record.distance {
            Some(blocks) => collect_known(
                FilterGroup::Distance,
                [OptionCatalog::distance_name(blocks)],
            ),
            None => HashSet::from([AUTO_OPTION_NAME.to_string()]),
        };

        let category = collect_known(
            FilterGroup::Category,
            record
                .categories()
                .iter()
                .map(|code| OptionCatalog::category_name(code)),
        );

        let groups = vec![
            GroupState::new(FilterGroup::Deal, deal),
            GroupState::new(FilterGroup::Sort, sort),
            GroupState::new(FilterGroup::Distance, distance),
            GroupState::new(FilterGroup::Category, category),
        ];
        tracing::debug!("Decoded search settings: {:?}", record);

        Self {
            term: record.term.clone(),
            groups,
        }
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn group(&self, group: FilterGroup) -> &GroupState {
        &self.groups[group.index()]
    }

    fn group_mut(&mut self, group: FilterGroup) -> &mut GroupState {
        &mut self.groups[group.index()]
    }

    pub fn groups(&self) -> &[GroupState] {
        &self.groups
    }

    /// Selects or deselects `name` in `group`.
    ///
    /// Single-select groups replace their selection and collapse. Deal and
    /// Category flip membership of `name`.
    pub fn toggle(&mut self, group: FilterGroup, name: &str) {
        let known = OptionCatalog::contains(group, name);
        debug_assert!(known, "{:?} is not a {} option", name, group);
        if !known {
            tracing::warn!("Ignoring toggle of unknown {} option {:?}", group, name);
            return;
        }

        let state = self.group_mut(group);
        match group.arity() {
            Arity::Single => {
                state.selected.clear();
                state.selected.insert(name.to_string());
                state.expanded = false;
            }
            Arity::Flag | Arity::Multi => {
                if !state.selected.remove(name) {
                    state.selected.insert(name.to_string());
                }
            }
        }
        tracing::debug!("Toggled {} option {:?}", group, name);
    }

    pub fn expand(&mut self, group: FilterGroup) {
        self.group_mut(group).expanded = true;
    }

    pub fn visible_row_count(&self, group: FilterGroup) -> usize {
        let state = self.group(group);
        if state.expanded {
            OptionCatalog::len(group)
        } else {
            state.visible_row_floor
        }
    }

    pub fn is_disclosure_row(&self, group: FilterGroup, row: usize) -> bool {
        let state = self.group(group);
        !state.expanded && row == state.visible_row_floor - 1
    }

    /// Text shown on the disclosure row of a collapsed group.
    pub fn disclosure_label(&self, group: FilterGroup) -> String {
        match group.arity() {
            Arity::Single => self
                .group(group)
                .sole_selection()
                .unwrap_or(AUTO_OPTION_NAME)
                .to_string(),
            Arity::Multi => SEE_ALL_LABEL.to_string(),
            Arity::Flag => DEAL_OPTION_NAME.to_string(),
        }
    }

    /// Builds the record handed to the search collaborator.
    ///
    /// Never fails: a single-select group without exactly one resolvable
    /// selection leaves its field unset.
    pub fn compile(&self) -> SettingsRecord {
        let sort = self.single_value(FilterGroup::Sort).and_then(|value| match value {
            OptionValue::Sort(mode) => Some(mode),
            _ => None,
        });
        let distance = self
            .single_value(FilterGroup::Distance)
            .and_then(|value| match value {
                OptionValue::Distance(blocks) => Some(blocks),
                _ => None,
            });

        let category = self.group(FilterGroup::Category);
        let categories = OptionCatalog::options(FilterGroup::Category)
            .iter()
            .filter(|option| category.is_selected(option.display_name))
            .filter_map(|option| match option.value {
                OptionValue::Category(code) => Some(code.to_string()),
                _ => None,
            })
            .collect();

        SettingsRecord {
            term: self.term.clone(),
            sort,
            categories: Some(categories),
            deals: Some(self.group(FilterGroup::Deal).selected_count() > 0),
            distance,
        }
    }

    fn single_value(&self, group: FilterGroup) -> Option<OptionValue> {
        let name = self.group(group).sole_selection()?;
        OptionCatalog::value_of(group, name).ok()
    }
}

impl From<&SettingsRecord> for SearchSettingsState {
    fn from(record: &SettingsRecord) -> Self {
        Self::decode(record)
    }
}

/// Keeps the names that resolved and logs the ones that did not.
fn collect_known<I>(group: FilterGroup, lookups: I) -> HashSet<String>
where
    I: IntoIterator<Item = CatalogResult<&'static str>>,
{
    let mut names = HashSet::new();
    for lookup in lookups {
        match lookup {
            Ok(name) => {
                names.insert(name.to_string());
            }
            Err(e) => tracing::warn!("Skipping stale {} setting: {}", group, e),
        }
    }
    names
}
