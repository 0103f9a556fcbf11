use crate::error::{PayseraError, Result};
use url::Url;

/// Builds return URLs from a site origin, a path template and a site id.
pub struct UrlComposer;

impl UrlComposer {
    /// Appends `path_template` and `site_id` to `base_url` as path segments and
    /// merges `extra` into the query string.
    ///
    /// Existing query parameters are preserved in order; a key present in
    /// `extra` replaces every existing occurrence of that key. An empty query
    /// is dropped entirely rather than leaving a trailing `?`.
    pub fn compose(
        base_url: &str,
        path_template: &str,
        site_id: &str,
        extra: &[(&str, &str)],
    ) -> Result<Url> {
        let mut url = Url::parse(base_url)?;

        let mut query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        for (key, value) in extra {
            query.retain(|(existing, _)| existing != key);
            query.push((key.to_string(), value.to_string()));
        }

        url.path_segments_mut()
            .map_err(|_| {
                PayseraError::InvalidParameter(format!("'{base_url}' cannot carry a path"))
            })?
            .pop_if_empty()
            .extend(path_template.split('/').filter(|s| !s.is_empty()))
            .push(site_id);

        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(query);
        }

        Ok(url)
    }
}
