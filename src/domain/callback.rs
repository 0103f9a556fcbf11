use crate::error::{PayseraError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

pub const ORDER_ID_FIELD: &str = "orderid";
pub const STATUS_FIELD: &str = "status";

/// Payment status reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// `0`: payment has not been executed.
    NotExecuted,
    /// `1`: payment successful.
    Successful,
    /// `2`: order accepted, payment not yet executed.
    Accepted,
    /// `3`: additional payment information.
    AdditionalInfo,
    Other(u8),
}

impl PaymentStatus {
    pub fn code(&self) -> u8 {
        match self {
            Self::NotExecuted => 0,
            Self::Successful => 1,
            Self::Accepted => 2,
            Self::AdditionalInfo => 3,
            Self::Other(code) => *code,
        }
    }
}

impl From<u8> for PaymentStatus {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::NotExecuted,
            1 => Self::Successful,
            2 => Self::Accepted,
            3 => Self::AdditionalInfo,
            other => Self::Other(other),
        }
    }
}

/// A gateway callback whose signature has been verified.
///
/// There is no public constructor: the only way to obtain one is through
/// [`crate::application::callback_verifier::CallbackVerifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackResult {
    order_id: String,
    status: PaymentStatus,
    fields: BTreeMap<String, String>,
}

impl CallbackResult {
    pub(crate) fn from_verified(fields: BTreeMap<String, String>) -> Result<Self> {
        let order_id = fields
            .get(ORDER_ID_FIELD)
            .filter(|value| !value.is_empty())
            .cloned()
            .ok_or_else(|| PayseraError::MalformedCallback("missing orderid".to_string()))?;

        let status = fields
            .get(STATUS_FIELD)
            .ok_or_else(|| PayseraError::MalformedCallback("missing status".to_string()))?;
        let status = status.trim().parse::<u8>().map_err(|_| {
            PayseraError::MalformedCallback(format!("status '{status}' is not numeric"))
        })?;

        Ok(Self {
            order_id,
            status: status.into(),
            fields,
        })
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn is_successful(&self) -> bool {
        self.status == PaymentStatus::Successful
    }

    /// Any other field the gateway sent, e.g. `amount`, `currency`, `payment`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_verified() {
        let result = CallbackResult::from_verified(fields(&[
            ("orderid", "1001"),
            ("status", "1"),
            ("amount", "1999"),
        ]))
        .unwrap();

        assert_eq!(result.order_id(), "1001");
        assert_eq!(result.status(), PaymentStatus::Successful);
        assert!(result.is_successful());
        assert_eq!(result.get("amount"), Some("1999"));
        assert_eq!(result.fields().len(), 3);
    }

    #[test]
    fn test_missing_order_id() {
        let result = CallbackResult::from_verified(fields(&[("status", "1")]));
        assert!(matches!(result, Err(PayseraError::MalformedCallback(_))));
    }

    #[test]
    fn test_non_numeric_status() {
        let result = CallbackResult::from_verified(fields(&[("orderid", "1"), ("status", "ok")]));
        assert!(matches!(result, Err(PayseraError::MalformedCallback(_))));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(PaymentStatus::from(0), PaymentStatus::NotExecuted);
        assert_eq!(PaymentStatus::from(2), PaymentStatus::Accepted);
        assert_eq!(PaymentStatus::from(7), PaymentStatus::Other(7));
        assert_eq!(PaymentStatus::Other(7).code(), 7);
    }
}
