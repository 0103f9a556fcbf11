use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Titles keyed by language code, with one language acting as the fallback.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Titles {
    pub default_language: String,
    pub by_language: BTreeMap<String, String>,
}

impl Titles {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            by_language: BTreeMap::new(),
        }
    }

    pub fn with(mut self, language: impl Into<String>, title: impl Into<String>) -> Self {
        self.by_language.insert(language.into(), title.into());
        self
    }

    /// Title in `language`, else in the default language, else empty.
    pub fn get(&self, language: &str) -> &str {
        self.by_language
            .get(language)
            .or_else(|| self.by_language.get(&self.default_language))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentMethod {
    pub key: String,
    pub titles: Titles,
    pub base_currency: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentGroup {
    pub key: String,
    pub titles: Titles,
    pub methods: Vec<PaymentMethod>,
}

/// Payment methods the gateway offers in one country.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryMethods {
    pub code: String,
    pub titles: Titles,
    pub groups: Vec<PaymentGroup>,
}

impl CountryMethods {
    pub fn group(&self, key: &str) -> Option<&PaymentGroup> {
        self.groups.iter().find(|group| group.key == key)
    }
}

/// Localized projection of the configured groups, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryPaymentMethods {
    pub country_code: String,
    pub country_title: String,
    pub payment_groups: Vec<PaymentGroupView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentGroupView {
    pub key: String,
    pub title: String,
    pub methods: Vec<PaymentMethodView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMethodView {
    pub key: String,
    pub title: String,
    pub currency: String,
    pub logo_url: Option<String>,
}
