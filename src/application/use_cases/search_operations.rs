use crate::domain::{
    entities::{Business, SettingsRecord},
    repositories::BusinessRepository,
};
use anyhow::Result;
use std::sync::Arc;

pub struct SearchBusinesses {
    repository: Arc<dyn BusinessRepository>,
    result_limit: usize,
}

impl SearchBusinesses {
    pub fn new(repository: Arc<dyn BusinessRepository>, result_limit: usize) -> Self {
        Self {
            repository,
            result_limit,
        }
    }

    /// Runs `settings` with `term` as the free-text query.
    pub async fn execute(&self, term: &str, settings: &SettingsRecord) -> Result<Vec<Business>> {
        let mut request = settings.clone();
        request.term = Some(term.to_string());

        tracing::info!("Searching businesses for {:?}", term);
        let mut businesses = self.repository.search(&request).await?;
        businesses.truncate(self.result_limit);
        Ok(businesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SortMode;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingRepository {
        requests: Mutex<Vec<SettingsRecord>>,
        results: Vec<Business>,
    }

    #[async_trait]
    impl BusinessRepository for RecordingRepository {
        async fn search(&self, settings: &SettingsRecord) -> Result<Vec<Business>> {
            self.requests.lock().unwrap().push(settings.clone());
            Ok(self.results.clone())
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl BusinessRepository for FailingRepository {
        async fn search(&self, _settings: &SettingsRecord) -> Result<Vec<Business>> {
            Err(anyhow!("service unavailable"))
        }
    }

    #[tokio::test]
    async fn test_execute_sets_term_and_keeps_filters() {
        let repository = Arc::new(RecordingRepository {
            requests: Mutex::new(Vec::new()),
            results: vec![Business::new("Delfina", 9.0)],
        });
        let search = SearchBusinesses::new(repository.clone(), 10);
        let settings = SettingsRecord::new()
            .with_term("stale")
            .with_sort(SortMode::Distance);

        let results = search.execute("pasta", &settings).await.unwrap();
        assert_eq!(results.len(), 1);

        let requests = repository.requests.lock().unwrap();
        assert_eq!(requests[0].term.as_deref(), Some("pasta"));
        assert_eq!(requests[0].sort, Some(SortMode::Distance));
        // The caller's record is left alone.
        assert_eq!(settings.term.as_deref(), Some("stale"));
    }

    #[tokio::test]
    async fn test_execute_limits_results() {
        let repository = Arc::new(RecordingRepository {
            requests: Mutex::new(Vec::new()),
            results: (0..5).map(|i| Business::new(format!("Cafe {}", i), 1.0)).collect(),
        });
        let search = SearchBusinesses::new(repository, 2);

        let results = search.execute("", &SettingsRecord::new()).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].name, "Cafe 1");
    }

    #[tokio::test]
    async fn test_execute_propagates_errors() {
        let search = SearchBusinesses::new(Arc::new(FailingRepository), 10);
        let err = search.execute("tacos", &SettingsRecord::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "service unavailable");
    }
}
