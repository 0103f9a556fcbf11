use crate::domain::config::SiteConfig;
use crate::domain::payment::{
    PROTOCOL_VERSION, PaymentParameters, PaymentRequest, RedirectInstruction, ReturnUrls,
    SIGN_PASSWORD_PARAM,
};
use crate::domain::ports::{GatewaySdkBox, OrderIdSealerBox};
use crate::error::{PayseraError, Result};
use crate::interfaces::url_composer::UrlComposer;

/// Query parameter carrying the sealed order id on accept/cancel URLs.
pub const ORDER_TOKEN_PARAM: &str = "order_id";

/// Maps a site language to the gateway's three-letter code.
fn gateway_language(language: &str) -> Option<&'static str> {
    match language.to_ascii_lowercase().as_str() {
        "lt" => Some("LIT"),
        "en" => Some("ENG"),
        "ru" => Some("RUS"),
        "lv" => Some("LAV"),
        "et" => Some("EST"),
        "pl" => Some("POL"),
        "de" => Some("GER"),
        _ => None,
    }
}

/// Assembles outbound payment requests and hands them to the gateway SDK.
///
/// Holds no per-request state; one instance can serve every site, since the
/// [`SiteConfig`] and request origin are passed to each call.
pub struct PaymentRequestBuilder {
    sdk: GatewaySdkBox,
    sealer: OrderIdSealerBox,
}

impl PaymentRequestBuilder {
    /// Creates a new `PaymentRequestBuilder`.
    ///
    /// # Arguments
    ///
    /// * `sdk` - Signs the assembled parameters into a redirect.
    /// * `sealer` - Produces the opaque order token for return URLs.
    pub fn new(sdk: GatewaySdkBox, sealer: OrderIdSealerBox) -> Self {
        Self { sdk, sealer }
    }

    /// Computes the accept, cancel and callback URLs for `order_id`.
    ///
    /// `origin` is the site's base URL as seen by the end user, e.g.
    /// `https://shop.example.com`.
    pub fn return_urls(
        &self,
        order_id: &str,
        config: &SiteConfig,
        origin: &str,
    ) -> Result<ReturnUrls> {
        let token = self.sealer.seal(order_id);
        let order_param = [(ORDER_TOKEN_PARAM, token.as_str())];
        let site_id = config.site_id.as_str();

        Ok(ReturnUrls {
            accept: UrlComposer::compose(origin, &config.accept_path, site_id, &order_param)?,
            cancel: UrlComposer::compose(origin, &config.cancel_path, site_id, &order_param)?,
            callback: UrlComposer::compose(origin, &config.callback_path, site_id, &[])?,
        })
    }

    /// Assembles the full parameter set without signing it.
    ///
    /// Fails with `ConfigurationError` for an invalid `config` and with
    /// `InvalidAmount` when the amount rounds to zero cents.
    pub fn parameters(
        &self,
        request: &PaymentRequest,
        config: &SiteConfig,
        origin: &str,
    ) -> Result<PaymentParameters> {
        config.check()?;
        let amount = request.amount.to_minor_units()?;
        if amount <= 0 {
            return Err(PayseraError::InvalidAmount(format!(
                "amount {} is less than one minor unit",
                request.amount.value()
            )));
        }
        let urls = self.return_urls(&request.order_id, config, origin)?;

        let mut params = PaymentParameters::new();
        params.insert("projectid", config.project_id);
        params.insert(SIGN_PASSWORD_PARAM, config.sign_password.expose());
        params.insert("currency", &config.currency);
        params.insert("country", &config.country);
        params.insert("test", if config.test_mode { 1 } else { 0 });
        params.insert("version", PROTOCOL_VERSION);
        params.insert("orderid", &request.order_id);
        params.insert("amount", amount);
        if let Some(lang) = gateway_language(&config.language) {
            params.insert("lang", lang);
        }
        params.insert("callbackurl", urls.callback);
        params.insert("accepturl", urls.accept);
        params.insert("cancelurl", urls.cancel);

        params.merge(&request.overrides);
        Ok(params)
    }

    /// Assembles and signs a payment request.
    ///
    /// Pure data assembly: redirecting the end user is up to the caller.
    pub fn build(
        &self,
        request: &PaymentRequest,
        config: &SiteConfig,
        origin: &str,
    ) -> Result<RedirectInstruction> {
        let params = self.parameters(request, config, origin)?;
        tracing::debug!(
            order_id = %request.order_id,
            site_id = %config.site_id,
            test = config.test_mode,
            overrides = request.overrides.len(),
            "assembled payment request"
        );
        self.sdk.sign(&params)
    }
}
