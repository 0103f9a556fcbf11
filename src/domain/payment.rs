use super::amount::Amount;
use crate::error::Result;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Parameter name carrying the shared secret; stripped by the SDK before encoding.
pub const SIGN_PASSWORD_PARAM: &str = "sign_password";

/// WebToPay protocol version sent with every request.
pub const PROTOCOL_VERSION: &str = "1.6";

/// A single payment attempt for an order.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub order_id: String,
    pub amount: Amount,
    /// Extra gateway parameters merged last; they win over computed ones.
    ///
    /// Nothing here is validated: overriding `amount` or `projectid` is the
    /// caller's responsibility.
    pub overrides: BTreeMap<String, String>,
}

impl PaymentRequest {
    pub fn new(order_id: impl Into<String>, amount: Decimal) -> Result<Self> {
        Ok(Self {
            order_id: order_id.into(),
            amount: Amount::new(amount)?,
            overrides: BTreeMap::new(),
        })
    }

    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }
}

/// The fully-formed parameter set handed to the gateway SDK for signing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PaymentParameters(BTreeMap<String, String>);

impl PaymentParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Merges `other` into `self`; on key collision `other` wins.
    pub fn merge(&mut self, other: &BTreeMap<String, String>) {
        for (key, value) in other {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PaymentParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| {
                if k == SIGN_PASSWORD_PARAM {
                    (k, "***")
                } else {
                    (k, v)
                }
            }))
            .finish()
    }
}

/// Where to send the end user, as produced by the gateway SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectInstruction {
    pub url: Url,
    pub data: String,
    pub sign: String,
}

/// Return URLs for one payment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnUrls {
    /// Carries the sealed `order_id`.
    pub accept: Url,
    /// Carries the sealed `order_id`.
    pub cancel: Url,
    /// No order id; the gateway reports it in the callback body.
    pub callback: Url,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayseraError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_rejects_non_positive_amount() {
        assert!(matches!(
            PaymentRequest::new("1001", dec!(0)),
            Err(PayseraError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_merge_overrides_win() {
        let mut params = PaymentParameters::new();
        params.insert("amount", 1999);
        params.insert("orderid", "1001");

        let mut overrides = BTreeMap::new();
        overrides.insert("amount".to_string(), "500".to_string());
        overrides.insert("p_email".to_string(), "buyer@example.com".to_string());
        params.merge(&overrides);

        assert_eq!(params.get("amount"), Some("500"));
        assert_eq!(params.get("orderid"), Some("1001"));
        assert_eq!(params.get("p_email"), Some("buyer@example.com"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut params = PaymentParameters::new();
        params.insert(SIGN_PASSWORD_PARAM, "hunter2");
        params.insert("projectid", 1);

        let debug = format!("{params:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("\"projectid\": \"1\""));
    }
}
