#![allow(dead_code)]

use paysera_redirect::application::callback_verifier::CallbackVerifier;
use paysera_redirect::application::payment_builder::PaymentRequestBuilder;
use paysera_redirect::domain::config::{SignPassword, SiteConfig};
use paysera_redirect::infrastructure::hmac_sealer::HmacOrderIdSealer;
use paysera_redirect::infrastructure::webtopay::{WebToPaySdk, encode_data, sign_data};
use std::collections::BTreeMap;

pub const ORIGIN: &str = "https://shop.example.com";
pub const SEALING_KEY: &str = "test-app-key";

pub fn site_config() -> SiteConfig {
    SiteConfig {
        project_id: 1,
        sign_password: SignPassword::new("s"),
        currency: "EUR".to_string(),
        country: "LT".to_string(),
        test_mode: true,
        payment_groups: vec!["e-banking".to_string(), "card".to_string()],
        language: "lt".to_string(),
        accept_path: "/pay/accept".to_string(),
        cancel_path: "/pay/cancel".to_string(),
        callback_path: "/pay/callback".to_string(),
        site_id: "42".to_string(),
    }
}

pub fn sealer() -> HmacOrderIdSealer {
    HmacOrderIdSealer::new(SEALING_KEY).unwrap()
}

pub fn builder() -> PaymentRequestBuilder {
    PaymentRequestBuilder::new(Box::new(WebToPaySdk::new()), Box::new(sealer()))
}

pub fn verifier() -> CallbackVerifier {
    CallbackVerifier::new(Box::new(WebToPaySdk::new()))
}

/// Builds the raw parameters the gateway would post to the callback URL.
pub fn signed_callback(fields: &[(&str, &str)], password: &str) -> BTreeMap<String, String> {
    let data = encode_data(fields.iter().copied());
    let ss1 = sign_data(&data, password);
    BTreeMap::from([
        ("data".to_string(), data),
        ("ss1".to_string(), ss1),
        ("ss2".to_string(), "unchecked".to_string()),
    ])
}
