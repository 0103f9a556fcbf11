use crate::domain::catalog::{CountryPaymentMethods, PaymentGroupView, PaymentMethodView};
use crate::domain::config::SiteConfig;
use crate::domain::ports::PaymentMethodCatalogBox;
use crate::error::{PayseraError, Result};

/// Lists the payment methods a site offers, grouped and localized.
pub struct PaymentMethodsService {
    catalog: PaymentMethodCatalogBox,
}

impl PaymentMethodsService {
    pub fn new(catalog: PaymentMethodCatalogBox) -> Self {
        Self { catalog }
    }

    /// Returns the site's configured payment groups, in configuration order,
    /// for the site's country and currency.
    ///
    /// Catalog failures are returned as `UpstreamUnavailable` and never
    /// retried. A configured group the catalog does not know is a
    /// `ConfigurationError`.
    pub async fn list(&self, config: &SiteConfig) -> Result<CountryPaymentMethods> {
        let country = self
            .catalog
            .country(config.project_id, &config.currency, &config.country)
            .await
            .map_err(|e| {
                tracing::warn!(
                    site_id = %config.site_id,
                    kind = e.kind(),
                    "payment method catalog lookup failed"
                );
                match e {
                    PayseraError::UpstreamUnavailable(_) => e,
                    other => PayseraError::UpstreamUnavailable(other.to_string()),
                }
            })?;

        let language = config.language.as_str();
        let payment_groups = config
            .payment_groups
            .iter()
            .map(|key| -> Result<PaymentGroupView> {
                let group = country.group(key).ok_or_else(|| {
                    PayseraError::ConfigurationError(format!(
                        "payment group '{key}' is not offered in {}",
                        country.code
                    ))
                })?;

                Ok(PaymentGroupView {
                    key: group.key.clone(),
                    title: group.titles.get(language).to_string(),
                    methods: group
                        .methods
                        .iter()
                        .map(|method| PaymentMethodView {
                            key: method.key.clone(),
                            title: method.titles.get(language).to_string(),
                            currency: method.base_currency.clone(),
                            logo_url: method.logo_url.clone(),
                        })
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CountryPaymentMethods {
            country_code: country.code.clone(),
            country_title: country.titles.get(language).to_string(),
            payment_groups,
        })
    }
}
