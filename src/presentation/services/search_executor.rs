use crate::application::UseCaseContainer;
use crate::domain::entities::{Business, SettingsRecord};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Runs search use cases to completion for synchronous callers.
pub struct SearchExecutor {
    runtime: Arc<tokio::runtime::Runtime>,
    use_cases: Arc<UseCaseContainer>,
}

impl SearchExecutor {
    pub fn new(use_cases: Arc<UseCaseContainer>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
        Ok(Self {
            runtime: Arc::new(runtime),
            use_cases,
        })
    }

    pub fn search(&self, settings: &SettingsRecord) -> Result<Vec<Business>> {
        let term = settings.term.clone().unwrap_or_default();
        let search = Arc::clone(&self.use_cases.search);
        self.runtime
            .block_on(async move { search.execute(&term, settings).await })
    }
}

impl Clone for SearchExecutor {
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
            use_cases: Arc::clone(&self.use_cases),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AppConfig, SortMode};
    use crate::infrastructure::memory::InMemoryBusinessRepository;

    fn executor(result_limit: usize) -> SearchExecutor {
        let config = AppConfig {
            result_limit,
            ..AppConfig::default()
        };
        let repository = Arc::new(InMemoryBusinessRepository::with_sample_data());
        SearchExecutor::new(Arc::new(UseCaseContainer::new(repository, &config))).unwrap()
    }

    #[test]
    fn test_search_blocks_until_results() {
        let settings = SettingsRecord::new()
            .with_term("mexican")
            .with_sort(SortMode::Distance);

        let results = executor(20).search(&settings).unwrap();
        let names: Vec<&str> = results.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["La Taqueria", "Tacolicious"]);
    }

    #[test]
    fn test_clones_share_the_runtime() {
        let first = executor(1);
        let second = first.clone();

        assert_eq!(first.search(&SettingsRecord::new()).unwrap().len(), 1);
        assert_eq!(second.search(&SettingsRecord::new()).unwrap().len(), 1);
    }
}
