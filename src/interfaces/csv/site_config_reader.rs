use crate::domain::config::SiteConfig;
use crate::error::{PayseraError, Result};
use std::io::Read;

/// Reads site configurations from a CSV source.
///
/// Expected header (order does not matter): `site_id, projectid, sign_password,
/// currency, country, test_mode, payment_groups, language, accept_path,
/// cancel_path, callback_path`. Multi-group values must be quoted, e.g.
/// `"card,e-banking"`.
pub struct SiteConfigReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SiteConfigReader<R> {
    /// Creates a new `SiteConfigReader` from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads, deserializes and validates sites.
    pub fn sites(self) -> impl Iterator<Item = Result<SiteConfig>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(PayseraError::from)
                .and_then(SiteConfig::validate)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "site_id, projectid, sign_password, currency, country, test_mode, payment_groups, language, accept_path, cancel_path, callback_path";

    #[test]
    fn test_reader_valid_stream() {
        let data = format!(
            "{HEADER}\n\
             42, 1, s, EUR, LT, 1,\"e-banking,card\", lt, /pay/accept, /pay/cancel, /pay/callback\n\
             43, 2, t, USD, US, false, card, en, /a, /c, /cb"
        );
        let reader = SiteConfigReader::new(data.as_bytes());
        let results: Vec<Result<SiteConfig>> = reader.sites().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.site_id, "42");
        assert_eq!(first.project_id, 1);
        assert!(first.test_mode);
        assert_eq!(first.payment_groups, vec!["e-banking", "card"]);

        let second = results[1].as_ref().unwrap();
        assert!(!second.test_mode);
        assert_eq!(second.payment_groups, vec!["card"]);
    }

    #[test]
    fn test_reader_invalid_row_does_not_stop_stream() {
        let data = format!(
            "{HEADER}\n\
             42, 1, , EUR, LT, 1, card, lt, /a, /c, /cb\n\
             43, x, t, EUR, LT, 1, card, lt, /a, /c, /cb\n\
             44, 3, u, EUR, LT, 0, card, lt, /a, /c, /cb"
        );
        let reader = SiteConfigReader::new(data.as_bytes());
        let results: Vec<Result<SiteConfig>> = reader.sites().collect();

        assert_eq!(results.len(), 3);
        assert!(matches!(
            results[0],
            Err(PayseraError::ConfigurationError(_))
        ));
        assert!(matches!(results[1], Err(PayseraError::CsvError(_))));
        assert_eq!(results[2].as_ref().unwrap().site_id, "44");
    }

    #[test]
    fn test_reader_numeric_group_key() {
        let data = format!("{HEADER}\n42, 1, s, EUR, LT, 1, 123, lt, /a, /c, /cb");
        let reader = SiteConfigReader::new(data.as_bytes());
        let results: Vec<Result<SiteConfig>> = reader.sites().collect();

        assert_eq!(results[0].as_ref().unwrap().payment_groups, vec!["123"]);
    }
}
