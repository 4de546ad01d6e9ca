use crate::models::SymptomsQuestionnaire;
use crate::services::distribution::{DistributionClient, DistributionError};
use std::sync::Arc;
use std::time::Duration;

/// In-memory cache holding the current questionnaire
///
/// A single entry with a TTL. Concurrent misses share one fetch, and failed
/// fetches are not cached.
pub struct QuestionnaireCache {
    cache: moka::future::Cache<(), Arc<SymptomsQuestionnaire>>,
}

impl QuestionnaireCache {
    /// Create a new cache
    pub fn new(ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Return the cached questionnaire, fetching it on a miss
    pub async fn get_or_fetch(
        &self,
        client: &DistributionClient,
    ) -> Result<Arc<SymptomsQuestionnaire>, Arc<DistributionError>> {
        self.cache
            .try_get_with((), async {
                tracing::debug!("Questionnaire cache miss, fetching");
                client.fetch_questionnaire().await.map(Arc::new)
            })
            .await
    }

    pub async fn get(&self) -> Option<Arc<SymptomsQuestionnaire>> {
        self.cache.get(&()).await
    }

    pub async fn insert(&self, questionnaire: SymptomsQuestionnaire) {
        self.cache.insert((), Arc::new(questionnaire)).await;
    }

    /// Drop the cached questionnaire so the next read refetches
    pub async fn invalidate(&self) {
        self.cache.invalidate(&()).await;
        tracing::debug!("Questionnaire cache invalidated");
    }
}
