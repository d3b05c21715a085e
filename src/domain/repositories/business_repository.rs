use crate::domain::entities::{Business, SettingsRecord};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn search(&self, settings: &SettingsRecord) -> Result<Vec<Business>>;
}
