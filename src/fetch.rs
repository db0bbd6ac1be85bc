//! Page fetching and envelope decoding.
//!
//! This module builds the wiki lookup URL for a headword, performs the
//! GET request, and decodes the JSONP callback envelope the endpoint
//! wraps around its JSON payload.

use crate::error::{Result, SvocabError};
use crate::models::LookupResponse;
use log::info;
use url::Url;

/// MediaWiki API endpoint of the Swedish Wiktionary.
pub const API_ENDPOINT: &str = "https://sv.wiktionary.org/w/api.php";

/// Builds the lookup URL for a headword.
///
/// The query serializer percent-encodes the term, so headwords with
/// non-ASCII letters (most Swedish ones) are safe to pass through.
pub fn lookup_url(term: &str) -> Result<Url> {
    let url = Url::parse_with_params(
        API_ENDPOINT,
        &[
            ("action", "parse"),
            ("format", "json"),
            ("prop", "text|revid|displaytitle"),
            ("callback", "?"),
            ("page", term),
        ],
    )?;
    Ok(url)
}

/// Fetches the raw response body for a headword lookup.
///
/// Logs the constructed URL before sending. Any transport error or
/// non-success status is an error; the caller treats it as fatal for the
/// whole run.
pub async fn lookup(client: &reqwest::Client, term: &str) -> Result<Vec<u8>> {
    let url = lookup_url(term)?;
    info!("running -> {}", url);

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(body.to_vec())
}

/// Strips the JSONP callback envelope from a response body.
///
/// The payload is the byte range between the first `(` and the last `)`,
/// which tolerates variable-length callback names and trailing
/// semicolons, unlike a fixed-offset strip.
pub fn strip_callback(body: &[u8]) -> Result<&[u8]> {
    let open = body
        .iter()
        .position(|&b| b == b'(')
        .ok_or(SvocabError::CallbackEnvelope)?;
    let close = body
        .iter()
        .rposition(|&b| b == b')')
        .ok_or(SvocabError::CallbackEnvelope)?;
    if close <= open {
        return Err(SvocabError::CallbackEnvelope);
    }
    Ok(&body[open + 1..close])
}

/// Decodes a JSONP-wrapped response body into a [`LookupResponse`].
///
/// A payload that is not the expected `parse` envelope (a MediaWiki
/// error object, for instance) fails deserialization.
pub fn decode_envelope(body: &[u8]) -> Result<LookupResponse> {
    let payload = strip_callback(body)?;
    Ok(serde_json::from_slice(payload)?)
}
