use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PayseraError {
    #[error("Invalid amount: {0}")]
    #[diagnostic(
        code(paysera::invalid_amount),
        help("payment amounts must be strictly positive")
    )]
    InvalidAmount(String),

    #[error("Callback signature does not match")]
    #[diagnostic(code(paysera::invalid_signature))]
    InvalidSignature,

    #[error("Malformed callback: {0}")]
    #[diagnostic(code(paysera::malformed_callback))]
    MalformedCallback(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(paysera::configuration),
        help("check the site configuration row for this project")
    )]
    ConfigurationError(String),

    #[error("Payment gateway unavailable: {0}")]
    #[diagnostic(
        code(paysera::upstream_unavailable),
        help("the request was not retried; retry explicitly if it is safe to do so")
    )]
    UpstreamUnavailable(String),

    #[error("Invalid request parameter: {0}")]
    #[diagnostic(code(paysera::invalid_parameter))]
    InvalidParameter(String),

    #[error("Order token is invalid or has been tampered with")]
    #[diagnostic(code(paysera::invalid_order_token))]
    InvalidOrderToken,

    #[error("URL error: {0}")]
    #[diagnostic(code(paysera::invalid_url))]
    InvalidUrl(#[from] url::ParseError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PayseraError>;

impl PayseraError {
    /// Short, secret-free label used when logging a rejected operation.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "invalid_amount",
            Self::InvalidSignature => "invalid_signature",
            Self::MalformedCallback(_) => "malformed_callback",
            Self::ConfigurationError(_) => "configuration",
            Self::UpstreamUnavailable(_) => "upstream_unavailable",
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::InvalidOrderToken => "invalid_order_token",
            Self::InvalidUrl(_) => "invalid_url",
            Self::CsvError(_) => "csv",
            Self::JsonError(_) => "json",
            Self::IoError(_) => "io",
        }
    }
}
