use crate::domain::ports::OrderIdSealer;
use crate::error::{PayseraError, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Seals order ids as `base64url(order_id).base64url(hmac_sha256(order_id))`.
///
/// The order id is not hidden, only authenticated, so accept/cancel handlers
/// can trust the id they read back from the query string.
#[derive(Clone)]
pub struct HmacOrderIdSealer {
    mac: HmacSha256,
}

impl HmacOrderIdSealer {
    pub fn new(key: impl AsRef<[u8]>) -> Result<Self> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(PayseraError::ConfigurationError(
                "order id sealing key must not be empty".to_string(),
            ));
        }
        let mac = HmacSha256::new_from_slice(key)
            .map_err(|e| PayseraError::ConfigurationError(e.to_string()))?;
        Ok(Self { mac })
    }

    fn tag(&self, order_id: &str) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(order_id.as_bytes());
        mac
    }
}

impl OrderIdSealer for HmacOrderIdSealer {
    fn seal(&self, order_id: &str) -> String {
        let tag = self.tag(order_id).finalize().into_bytes();
        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(order_id),
            URL_SAFE_NO_PAD.encode(tag)
        )
    }

    fn unseal(&self, token: &str) -> Result<String> {
        let (payload, tag) = token
            .split_once('.')
            .ok_or(PayseraError::InvalidOrderToken)?;
        let payload = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| PayseraError::InvalidOrderToken)?;
        let tag = URL_SAFE_NO_PAD
            .decode(tag)
            .map_err(|_| PayseraError::InvalidOrderToken)?;
        let order_id = String::from_utf8(payload).map_err(|_| PayseraError::InvalidOrderToken)?;

        self.tag(&order_id)
            .verify_slice(&tag)
            .map_err(|_| PayseraError::InvalidOrderToken)?;
        Ok(order_id)
    }
}
