use super::SearchSettingsState;
use crate::domain::entities::SettingsRecord;

type SaveCallback = Box<dyn FnOnce(SettingsRecord) + Send>;

/// An open settings screen.
///
/// Holds the working state until the user saves or cancels. Saving hands the
/// compiled record to the callback given at [`open`](Self::open).
pub struct SettingsScreen {
    state: SearchSettingsState,
    on_save: SaveCallback,
}

impl SettingsScreen {
    pub fn open<F>(current: &SettingsRecord, on_save: F) -> Self
    where
        F: FnOnce(SettingsRecord) + Send + 'static,
    {
        Self {
            state: SearchSettingsState::decode(current),
            on_save: Box::new(on_save),
        }
    }

    pub fn state(&self) -> &SearchSettingsState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SearchSettingsState {
        &mut self.state
    }

    pub fn save(self) {
        let record = self.state.compile();
        tracing::info!("Saving search settings: {:?}", record);
        (self.on_save)(record);
    }

    pub fn cancel(self) {
        tracing::debug!("Discarding search settings changes");
    }
}
