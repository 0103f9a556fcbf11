use crate::error::{PayseraError, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Shared secret used to sign requests and verify callbacks.
///
/// Never printed: `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SignPassword(String);

impl SignPassword {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SignPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SignPassword(***)")
    }
}

impl fmt::Display for SignPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Per-site gateway configuration.
///
/// Loaded once by the host (see [`SiteConfig::from_json`] and
/// [`crate::interfaces::csv::site_config_reader::SiteConfigReader`]) and
/// passed by reference to every operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Gateway project id.
    #[serde(rename = "projectid", alias = "project_id")]
    pub project_id: u32,
    pub sign_password: SignPassword,
    /// ISO 4217 code, e.g. `EUR`.
    pub currency: String,
    /// ISO 3166-1 alpha-2 code, e.g. `LT`.
    pub country: String,
    /// Marks requests as sandbox transactions.
    #[serde(deserialize_with = "deserialize_flag", default)]
    pub test_mode: bool,
    /// Payment method groups offered to the end user, in display order.
    #[serde(deserialize_with = "deserialize_group_list", default)]
    pub payment_groups: Vec<String>,
    pub language: String,
    pub accept_path: String,
    pub cancel_path: String,
    pub callback_path: String,
    pub site_id: String,
}

impl SiteConfig {
    /// Parses a single site configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()
    }

    /// Checks the invariants every operation relies on.
    pub fn validate(self) -> Result<Self> {
        self.check()?;
        Ok(self)
    }

    /// Borrowing form of [`SiteConfig::validate`], run by every operation
    /// that signs or verifies with this configuration.
    pub fn check(&self) -> Result<()> {
        if self.project_id == 0 {
            return Err(PayseraError::ConfigurationError(
                "projectid must be set".to_string(),
            ));
        }
        if self.sign_password.is_empty() {
            return Err(PayseraError::ConfigurationError(
                "sign_password must be set".to_string(),
            ));
        }
        if !is_currency_code(&self.currency) {
            return Err(PayseraError::ConfigurationError(format!(
                "currency '{}' is not an ISO 4217 code",
                self.currency
            )));
        }
        if self.site_id.is_empty() {
            return Err(PayseraError::ConfigurationError(
                "site_id must be set".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u8),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid flag value '{other}'"
            ))),
        },
        Flag::Int(other) => Err(serde::de::Error::custom(format!(
            "invalid flag value '{other}'"
        ))),
    }
}

fn deserialize_group_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Groups {
        List(Vec<String>),
        Joined(String),
        Numeric(u64),
    }

    let groups = match Groups::deserialize(deserializer)? {
        Groups::List(list) => list,
        Groups::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        Groups::Numeric(key) => vec![key.to_string()],
    };

    Ok(groups
        .into_iter()
        .map(|group| group.trim().to_string())
        .filter(|group| !group.is_empty())
        .collect())
}
