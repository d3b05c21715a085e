pub mod settings_rows;
pub mod settings_screen;
pub mod settings_state;

pub use settings_rows::{RowAction, SettingsRow};
pub use settings_screen::SettingsScreen;
pub use settings_state::{GroupState, SearchSettingsState};
