//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the command-line search client.
pub struct ClientConfig {
    /// Base URL of the adoption API.
    pub api_url: String,
    /// Bearer token for the favorites overlay; absent means anonymous.
    pub bearer_token: Option<String>,
}
