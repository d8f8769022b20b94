use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of characters in a generated short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Characters a generated short code is drawn from (`[a-zA-Z0-9]`).
pub const SHORT_CODE_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// An identifier that stands in for an original URL.
///
/// Codes coming from the outside (e.g. a request path) are not validated:
/// a code that was never issued simply resolves to nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code has the shape of a generated code: exactly
    /// [`SHORT_CODE_LENGTH`] characters from [`SHORT_CODE_ALPHABET`].
    pub fn is_generated_shape(&self) -> bool {
        self.0.len() == SHORT_CODE_LENGTH
            && self.0.bytes().all(|b| SHORT_CODE_ALPHABET.contains(&b))
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ShortCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}
