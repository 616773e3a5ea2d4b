//! Form-encoded body extractor for the AJAX endpoint

use async_trait::async_trait;
use axum::{
    body::to_bytes,
    extract::{FromRequest, Request},
};
use std::collections::BTreeMap;
use tracing::warn;

use super::models::{AjaxRequest, FormField};
use crate::common::ApiError;

/// Upper bound on an AJAX body; the contact form is a handful of short
/// fields.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// AJAX payload extractor
///
/// Decodes an `application/x-www-form-urlencoded` body of the shape a
/// browser produces when posting `serializeArray()` output:
/// `method=formSubmit&data[0][name]=name&data[0][value]=John`.
///
/// Decoding is total: malformed pairs are kept as opaque keys so the
/// handler can apply the protocol's own error replies. Only transport
/// failures (unreadable, oversized, or non-UTF-8 bodies) reject here.
pub struct AjaxForm(pub AjaxRequest);

#[async_trait]
impl<S> FromRequest<S> for AjaxForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = to_bytes(req.into_body(), MAX_BODY_BYTES).await.map_err(|e| {
            warn!(error = %e, "failed to buffer AJAX request body");
            ApiError::BadRequest("unreadable request body".to_string())
        })?;

        let body = std::str::from_utf8(&bytes).map_err(|_| {
            warn!("AJAX request body is not valid UTF-8");
            ApiError::BadRequest("request body is not valid UTF-8".to_string())
        })?;

        Ok(AjaxForm(parse_ajax_body(body)))
    }
}

/// Decode a form-encoded body into an `AjaxRequest`.
///
/// Pairs are processed in wire order; `data[i][name]` / `data[i][value]`
/// keys are reassembled into fields by index, a missing half becoming the
/// empty string.
pub(crate) fn parse_ajax_body(body: &str) -> AjaxRequest {
    let mut method = None;
    let mut entries: BTreeMap<usize, (Option<String>, Option<String>)> = BTreeMap::new();
    let mut pairs = 0usize;

    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        };
        pairs += 1;

        if key == "method" {
            method = Some(value);
        } else if let Some((index, part)) = parse_data_key(&key) {
            let entry = entries.entry(index).or_default();
            match part {
                DataPart::Name => entry.0 = Some(value),
                DataPart::Value => entry.1 = Some(value),
            }
        }
    }

    let data = entries
        .into_values()
        .map(|(name, value)| FormField {
            name: name.unwrap_or_default(),
            value: value.unwrap_or_default(),
        })
        .collect();

    AjaxRequest::new(method, data, pairs)
}

/// Form-encoding component decoding: `+` is a space, `%XX` a
/// percent-escape. Undecodable sequences are passed through unchanged.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

enum DataPart {
    Name,
    Value,
}

/// Matches `data[<index>][name]` and `data[<index>][value]` keys.
fn parse_data_key(key: &str) -> Option<(usize, DataPart)> {
    let rest = key.strip_prefix("data[")?;
    let (index, rest) = rest.split_once(']')?;
    let index: usize = index.parse().ok()?;
    match rest {
        "[name]" => Some((index, DataPart::Name)),
        "[value]" => Some((index, DataPart::Value)),
        _ => None,
    }
}
