use crate::application::use_cases::*;
use crate::domain::entities::AppConfig;
use crate::domain::repositories::BusinessRepository;
use std::sync::Arc;

pub struct UseCaseContainer {
    pub search: Arc<SearchBusinesses>,
}

impl UseCaseContainer {
    pub fn new(business_repository: Arc<dyn BusinessRepository>, config: &AppConfig) -> Self {
        Self {
            search: Arc::new(SearchBusinesses::new(
                Arc::clone(&business_repository),
                config.result_limit,
            )),
        }
    }
}
