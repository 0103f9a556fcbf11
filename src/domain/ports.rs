use super::catalog::CountryMethods;
use super::config::SignPassword;
use super::payment::{PaymentParameters, RedirectInstruction};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Signs outbound requests and authenticates inbound callbacks.
///
/// Implementations perform only local computation.
pub trait GatewaySdk: Send + Sync {
    fn sign(&self, params: &PaymentParameters) -> Result<RedirectInstruction>;

    /// Returns the decoded callback fields once `raw` is proven authentic.
    fn verify(
        &self,
        raw: &BTreeMap<String, String>,
        project_id: u32,
        password: &SignPassword,
    ) -> Result<BTreeMap<String, String>>;
}

/// Turns order ids into opaque tokens for return URLs, and back.
pub trait OrderIdSealer: Send + Sync {
    fn seal(&self, order_id: &str) -> String;
    fn unseal(&self, token: &str) -> Result<String>;
}

/// Source of the gateway's payment-method list.
#[async_trait]
pub trait PaymentMethodCatalog: Send + Sync {
    async fn country(
        &self,
        project_id: u32,
        currency: &str,
        country: &str,
    ) -> Result<CountryMethods>;
}

pub type GatewaySdkBox = Box<dyn GatewaySdk>;
pub type OrderIdSealerBox = Box<dyn OrderIdSealer>;
pub type PaymentMethodCatalogBox = Box<dyn PaymentMethodCatalog>;
