use serde::{Deserialize, Serialize};

/// Query parameters of the shorten endpoint.
#[derive(Deserialize)]
pub struct ShortenQuery {
    /// Caller-chosen short code; absent selects random generation.
    #[serde(rename = "custom-hash")]
    pub custom_hash: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
