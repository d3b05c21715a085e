pub mod business;
pub mod config;
pub mod filter_option;
pub mod settings;

pub use business::Business;
pub use config::AppConfig;
pub use filter_option::{Arity, FilterGroup, FilterOption, OptionValue, SortMode};
pub use settings::SettingsRecord;
