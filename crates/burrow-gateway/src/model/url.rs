use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub original: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub original: String,
    pub short: String,
}
