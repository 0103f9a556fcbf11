use crate::domain::catalog::CountryMethods;
use crate::domain::ports::PaymentMethodCatalog;
use crate::error::{PayseraError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type CatalogKey = (u32, String, String);

/// A thread-safe in-memory payment-method catalog.
///
/// Uses `Arc<RwLock<HashMap<..>>>` so a host can refresh entries from a
/// background task while request handlers read them. Also the catalog of
/// choice in tests.
#[derive(Default, Clone)]
pub struct StaticPaymentMethodCatalog {
    countries: Arc<RwLock<HashMap<CatalogKey, CountryMethods>>>,
}

impl StaticPaymentMethodCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores (or replaces) the methods offered for a project, currency and country.
    pub async fn insert(&self, project_id: u32, currency: &str, methods: CountryMethods) {
        let mut countries = self.countries.write().await;
        countries.insert(
            (project_id, currency.to_string(), methods.code.clone()),
            methods,
        );
    }
}

#[async_trait]
impl PaymentMethodCatalog for StaticPaymentMethodCatalog {
    async fn country(
        &self,
        project_id: u32,
        currency: &str,
        country: &str,
    ) -> Result<CountryMethods> {
        let countries = self.countries.read().await;
        countries
            .get(&(project_id, currency.to_string(), country.to_string()))
            .cloned()
            .ok_or_else(|| {
                PayseraError::UpstreamUnavailable(format!(
                    "no payment methods for project {project_id}, {currency} in {country}"
                ))
            })
    }
}
