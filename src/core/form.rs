//! Form Body Decoding
//!
//! Strict `application/x-www-form-urlencoded` decoding for token endpoint
//! responses. `serde_urlencoded` decodes bad escapes lossily, so the raw body
//! is checked first.

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use url::form_urlencoded;

use crate::error::ParseError;

/// Decode a form-encoded body into `T`.
///
/// Fails on malformed percent escapes, `;` separators, and values that do
/// not fit `T`. A repeated key keeps its first value.
pub fn decode_form<T: DeserializeOwned>(body: &str) -> Result<T, ParseError> {
    validate_query(body)?;
    Ok(serde_urlencoded::from_str(&first_values(body))?)
}

/// Re-encode `body` with only the first occurrence of each key.
fn first_values(body: &str) -> String {
    let mut seen = HashSet::new();
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        if seen.insert(key.clone()) {
            serializer.append_pair(&key, &value);
        }
    }
    serializer.finish()
}

fn validate_query(body: &str) -> Result<(), ParseError> {
    for pair in body.split('&').filter(|p| !p.is_empty()) {
        if pair.contains(';') {
            return Err(ParseError::InvalidQuery {
                message: format!("invalid semicolon separator in {:?}", pair),
            });
        }
        validate_escapes(pair)?;
    }
    Ok(())
}

fn validate_escapes(pair: &str) -> Result<(), ParseError> {
    let bytes = pair.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() >= i + 3
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(ParseError::InvalidQuery {
                    message: format!(
                        "invalid URL escape {:?}",
                        String::from_utf8_lossy(&bytes[i..end])
                    ),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
