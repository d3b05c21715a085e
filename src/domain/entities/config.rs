use super::{SettingsRecord, SortMode};
use serde::{Deserialize, Serialize};

const DEFAULT_RESULT_LIMIT: usize = 20;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Persist the settings committed from the settings screen.
    pub remember_settings: bool,
    pub result_limit: usize,
    pub last_settings: SettingsRecord,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remember_settings: true,
            result_limit: DEFAULT_RESULT_LIMIT,
            last_settings: SettingsRecord::new().with_sort(SortMode::Auto),
        }
    }
}
