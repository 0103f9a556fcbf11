use crate::domain::config::{SignPassword, is_currency_code};
use crate::domain::payment::{PaymentParameters, RedirectInstruction, SIGN_PASSWORD_PARAM};
use crate::domain::ports::GatewaySdk;
use crate::error::{PayseraError, Result};
use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{self, GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use std::collections::BTreeMap;
use subtle::ConstantTimeEq;
use url::{Url, form_urlencoded};

pub const DEFAULT_PAY_URL: &str = "https://bank.paysera.com/pay/";

const REQUIRED_PARAMS: [&str; 6] = [
    "projectid",
    "orderid",
    "accepturl",
    "cancelurl",
    "callbackurl",
    SIGN_PASSWORD_PARAM,
];
const MAX_ORDER_ID_LEN: usize = 40;

/// Callbacks arrive both with and without `=` padding.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes parameters into the gateway's `data` field:
/// a form-encoded query string, base64url encoded with padding.
pub fn encode_data<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    general_purpose::URL_SAFE.encode(query)
}

/// `md5(data + password)` as lowercase hex; used for both `sign` and `ss1`.
pub fn sign_data(data: &str, password: &str) -> String {
    format!("{:x}", md5::compute(format!("{data}{password}")))
}

/// [`GatewaySdk`] speaking the WebToPay protocol.
#[derive(Debug, Clone)]
pub struct WebToPaySdk {
    pay_url: String,
}

impl Default for WebToPaySdk {
    fn default() -> Self {
        Self::new()
    }
}

impl WebToPaySdk {
    pub fn new() -> Self {
        Self {
            pay_url: DEFAULT_PAY_URL.to_string(),
        }
    }

    /// Points redirects at a different gateway endpoint (e.g. a local stub).
    pub fn with_pay_url(pay_url: &str) -> Result<Self> {
        Url::parse(pay_url)?;
        Ok(Self {
            pay_url: pay_url.to_string(),
        })
    }

    fn validate(params: &PaymentParameters) -> Result<()> {
        if let Some(missing) = REQUIRED_PARAMS.iter().find(|name| !params.contains(name)) {
            return Err(PayseraError::InvalidParameter(format!(
                "missing required parameter '{missing}'"
            )));
        }
        if let Some(project_id) = params.get("projectid")
            && project_id.parse::<u32>().is_err()
        {
            return Err(PayseraError::InvalidParameter(format!(
                "projectid '{project_id}' is not numeric"
            )));
        }
        if let Some(order_id) = params.get("orderid")
            && order_id.chars().count() > MAX_ORDER_ID_LEN
        {
            return Err(PayseraError::InvalidParameter(format!(
                "orderid is longer than {MAX_ORDER_ID_LEN} characters"
            )));
        }
        if let Some(currency) = params.get("currency")
            && !is_currency_code(currency)
        {
            return Err(PayseraError::InvalidParameter(format!(
                "currency '{currency}' is not an ISO 4217 code"
            )));
        }
        Ok(())
    }
}

impl GatewaySdk for WebToPaySdk {
    fn sign(&self, params: &PaymentParameters) -> Result<RedirectInstruction> {
        Self::validate(params)?;
        let password = params.get(SIGN_PASSWORD_PARAM).unwrap_or_default();

        let data = encode_data(params.iter().filter(|(key, _)| *key != SIGN_PASSWORD_PARAM));
        let sign = sign_data(&data, password);

        let mut url = Url::parse(&self.pay_url)?;
        url.query_pairs_mut()
            .append_pair("data", &data)
            .append_pair("sign", &sign);

        Ok(RedirectInstruction { url, data, sign })
    }

    fn verify(
        &self,
        raw: &BTreeMap<String, String>,
        project_id: u32,
        password: &SignPassword,
    ) -> Result<BTreeMap<String, String>> {
        let data = raw
            .get("data")
            .ok_or_else(|| PayseraError::MalformedCallback("missing data".to_string()))?;
        let ss1 = raw
            .get("ss1")
            .ok_or_else(|| PayseraError::MalformedCallback("missing ss1".to_string()))?;

        let expected = sign_data(data, password.expose());
        if !bool::from(expected.as_bytes().ct_eq(ss1.as_bytes())) {
            return Err(PayseraError::InvalidSignature);
        }

        let decoded = URL_SAFE_LENIENT
            .decode(data)
            .map_err(|e| PayseraError::MalformedCallback(format!("data is not base64: {e}")))?;
        let fields: BTreeMap<String, String> =
            form_urlencoded::parse(&decoded).into_owned().collect();

        match fields.get("projectid").map(|id| id.parse::<u32>()) {
            Some(Ok(id)) if id == project_id => Ok(fields),
            Some(_) => Err(PayseraError::MalformedCallback(
                "projectid does not match this site".to_string(),
            )),
            None => Err(PayseraError::MalformedCallback(
                "missing projectid".to_string(),
            )),
        }
    }
}
