//! Components API configuration.

/// Endpoint configuration for the landing pages service.
///
/// The CLI always runs against the default; tests construct one aimed at a
/// local double.
#[derive(Debug, Clone)]
pub struct ComponentsApiConfig {
    /// Base URL of the landing pages service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ComponentsApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

fn default_base_url() -> String {
    "http://localhost:9003".to_string()
}

fn default_timeout() -> u64 {
    30
}
