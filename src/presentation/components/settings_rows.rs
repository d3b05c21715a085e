use super::SearchSettingsState;
use crate::domain::entities::{Arity, FilterGroup};
use crate::domain::services::OptionCatalog;

/// What a presentation layer should draw for one row of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsRow {
    Switch { name: String, on: bool },
    Choice { name: String, checked: bool },
    Disclosure { label: String },
}

/// Outcome of tapping a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Expanded,
    Selected(String),
    None,
}

pub fn rows(state: &SearchSettingsState, group: FilterGroup) -> Vec<SettingsRow> {
    let selection = state.group(group);
    (0..state.visible_row_count(group))
        .filter_map(|row| {
            // Deal fits in its floor, so it never needs a disclosure row.
            if group != FilterGroup::Deal && state.is_disclosure_row(group, row) {
                return Some(SettingsRow::Disclosure {
                    label: state.disclosure_label(group),
                });
            }
            let option = OptionCatalog::option_at(group, row)?;
            let name = option.display_name.to_string();
            let marked = selection.is_selected(option.display_name);
            Some(match group.arity() {
                Arity::Single => SettingsRow::Choice {
                    name,
                    checked: marked,
                },
                Arity::Flag | Arity::Multi => SettingsRow::Switch { name, on: marked },
            })
        })
        .collect()
}

/// Applies a tap on `row` of `group`.
///
/// Switch rows do nothing here; they change through [`flip_switch`].
pub fn select_row(state: &mut SearchSettingsState, group: FilterGroup, row: usize) -> RowAction {
    if group == FilterGroup::Deal {
        return RowAction::None;
    }
    if state.is_disclosure_row(group, row) {
        state.expand(group);
        tracing::debug!("Expanded {} options", group);
        return RowAction::Expanded;
    }
    if !group.is_single_select() {
        return RowAction::None;
    }
    match OptionCatalog::option_at(group, row) {
        Some(option) => {
            state.toggle(group, option.display_name);
            RowAction::Selected(option.display_name.to_string())
        }
        None => RowAction::None,
    }
}

/// Flips a Deal or Category switch. Returns `false` for single-select groups.
pub fn flip_switch(state: &mut SearchSettingsState, group: FilterGroup, name: &str) -> bool {
    if group.is_single_select() {
        return false;
    }
    state.toggle(group, name);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{SettingsRecord, SortMode};

    fn state() -> SearchSettingsState {
        SearchSettingsState::decode(
            &SettingsRecord::new()
                .with_sort(SortMode::Distance)
                .with_categories(["burgers"]),
        )
    }

    #[test]
    fn test_collapsed_rows() {
        let state = state();

        assert_eq!(
            rows(&state, FilterGroup::Deal),
            vec![SettingsRow::Switch {
                name: "Offering a Deal".to_string(),
                on: false,
            }]
        );
        assert_eq!(
            rows(&state, FilterGroup::Sort),
            vec![SettingsRow::Disclosure {
                label: "Distance".to_string(),
            }]
        );
        assert_eq!(
            rows(&state, FilterGroup::Distance),
            vec![SettingsRow::Disclosure {
                label: "Auto".to_string(),
            }]
        );
        assert_eq!(
            rows(&state, FilterGroup::Category),
            vec![
                SettingsRow::Switch {
                    name: "American".to_string(),
                    on: false,
                },
                SettingsRow::Switch {
                    name: "Barbeque".to_string(),
                    on: false,
                },
                SettingsRow::Switch {
                    name: "Breakfast & Brunch".to_string(),
                    on: false,
                },
                SettingsRow::Disclosure {
                    label: "See All".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_expanded_sort_rows_are_checkmarks() {
        let mut state = state();
        state.expand(FilterGroup::Sort);

        let rows = rows(&state, FilterGroup::Sort);
        assert_eq!(rows.len(), OptionCatalog::len(FilterGroup::Sort));
        assert_eq!(
            rows[2],
            SettingsRow::Choice {
                name: "Distance".to_string(),
                checked: true,
            }
        );
        assert_eq!(
            rows.iter()
                .filter(|row| matches!(row, SettingsRow::Choice { checked: true, .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_expanded_category_shows_every_option() {
        let mut state = state();
        state.expand(FilterGroup::Category);

        let rows = rows(&state, FilterGroup::Category);
        assert_eq!(rows.len(), OptionCatalog::len(FilterGroup::Category));
        assert!(rows.contains(&SettingsRow::Switch {
            name: "Burgers".to_string(),
            on: true,
        }));
        assert!(!rows.iter().any(|row| matches!(row, SettingsRow::Disclosure { .. })));
    }

    #[test]
    fn test_select_disclosure_then_option() {
        let mut state = state();

        assert_eq!(select_row(&mut state, FilterGroup::Distance, 0), RowAction::Expanded);
        assert!(state.group(FilterGroup::Distance).is_expanded());

        assert_eq!(
            select_row(&mut state, FilterGroup::Distance, 3),
            RowAction::Selected("1 mile".to_string())
        );
        assert!(!state.group(FilterGroup::Distance).is_expanded());
        assert_eq!(state.compile().distance, Some(20.0));
    }

    #[test]
    fn test_select_category_rows() {
        let mut state = state();

        assert_eq!(select_row(&mut state, FilterGroup::Category, 1), RowAction::None);
        assert_eq!(select_row(&mut state, FilterGroup::Category, 3), RowAction::Expanded);
        // Expanded categories never offer the disclosure row again.
        assert_eq!(select_row(&mut state, FilterGroup::Category, 3), RowAction::None);
        assert!(state.group(FilterGroup::Category).is_expanded());
    }

    #[test]
    fn test_select_deal_row_does_nothing() {
        let mut state = state();
        let before = state.clone();
        assert_eq!(select_row(&mut state, FilterGroup::Deal, 0), RowAction::None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_flip_switch() {
        let mut state = state();

        assert!(flip_switch(&mut state, FilterGroup::Deal, "Offering a Deal"));
        assert!(flip_switch(&mut state, FilterGroup::Category, "Burgers"));
        assert!(!flip_switch(&mut state, FilterGroup::Sort, "Best Match"));

        let compiled = state.compile();
        assert_eq!(compiled.deals, Some(true));
        assert_eq!(compiled.categories, Some(Vec::new()));
        assert_eq!(compiled.sort, Some(SortMode::Distance));
    }
}
