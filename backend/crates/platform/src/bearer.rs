//! Authorization Header Parsing

use http::{HeaderMap, header};

/// Extract the token from `Authorization: <scheme> <token>`
///
/// The scheme word is not checked: `Token abc` yields `abc`, which then
/// fails verification instead of counting as absent. Returns `None` when the
/// header is absent, not valid UTF-8, or carries nothing after the scheme.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (_scheme, token) = value.trim().split_once(' ')?;

    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}
