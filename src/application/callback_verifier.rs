use crate::domain::callback::CallbackResult;
use crate::domain::config::SiteConfig;
use crate::domain::ports::GatewaySdkBox;
use crate::error::Result;
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Authenticates gateway callbacks before anything reads their fields.
pub struct CallbackVerifier {
    sdk: GatewaySdkBox,
}

impl CallbackVerifier {
    pub fn new(sdk: GatewaySdkBox) -> Self {
        Self { sdk }
    }

    /// Verifies the raw callback parameters (e.g. `data`, `ss1`, `ss2`) against
    /// the site's project id and password.
    ///
    /// Fails with `InvalidSignature` when the signature does not match and
    /// with `MalformedCallback` when required fields are missing. An invalid
    /// `config` (e.g. an empty password) is a `ConfigurationError`.
    pub fn verify(
        &self,
        raw: &BTreeMap<String, String>,
        config: &SiteConfig,
    ) -> Result<CallbackResult> {
        let verified = config
            .check()
            .and_then(|()| self.sdk.verify(raw, config.project_id, &config.sign_password))
            .and_then(CallbackResult::from_verified);

        match &verified {
            Ok(result) => tracing::debug!(
                site_id = %config.site_id,
                order_id = %result.order_id(),
                status = result.status().code(),
                "verified gateway callback"
            ),
            Err(e) => tracing::warn!(
                site_id = %config.site_id,
                kind = e.kind(),
                "rejected gateway callback"
            ),
        }
        verified
    }

    /// Same as [`CallbackVerifier::verify`], starting from a raw query string
    /// or `application/x-www-form-urlencoded` body.
    pub fn verify_query(&self, query: &str, config: &SiteConfig) -> Result<CallbackResult> {
        let raw: BTreeMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        self.verify(&raw, config)
    }
}
