//! URL canonicalization applied before solving. Non-URL text passes through unchanged.

use answer_core::{Normalizer, Result};
use async_trait::async_trait;
use url::Url;

/// Query parameters that only carry click attribution.
const TRACKING_PARAMS: &[&str] = &["fbclid", "gclid", "yclid", "mc_cid", "mc_eid"];

fn is_tracking_param(key: &str) -> bool {
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key)
}

/// Canonical form of an absolute http(s) URL, or `None` if `text` is not one.
///
/// Scheme and host are lowercased and the default port dropped (by the parser); the fragment and tracking
/// parameters are removed. The query is only re-serialized when a tracking parameter was present, so the result is
/// a fixed point.
pub fn canonical_url(text: &str) -> Option<String> {
    if text.is_empty() || text.chars().any(char::is_whitespace) {
        return None;
    }
    let mut url = Url::parse(text).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }

    url.set_fragment(None);

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if pairs.iter().any(|(k, _)| is_tracking_param(k)) {
        let kept: Vec<(String, String)> = pairs
            .into_iter()
            .filter(|(k, _)| !is_tracking_param(k))
            .collect();
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
    } else if url.query() == Some("") {
        url.set_query(None);
    }

    Some(url.into())
}

/// [`Normalizer`] that canonicalizes URL-shaped input and leaves everything else alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlNormalizer;

impl UrlNormalizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Normalizer for UrlNormalizer {
    async fn normalize(&self, text: &str) -> Result<String> {
        Ok(canonical_url(text).unwrap_or_else(|| text.to_string()))
    }
}
