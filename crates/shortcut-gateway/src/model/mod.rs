mod url;

pub use url::{HealthResponse, ShortenQuery};
