//! Search filters for a business-search client.
//!
//! The settings screen state machine lives in
//! [`presentation::components::SearchSettingsState`]; it decodes a
//! [`domain::entities::SettingsRecord`], tracks selections per filter group
//! and compiles the result back into a record for the search collaborator.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
