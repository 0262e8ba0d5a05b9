//! Components API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::domain::{AppError, ComponentTemplate, ComponentsApiConfig};
use crate::ports::{ComponentsClient, CreatedComponent};

const COMPONENTS_PATH: &str = "/api/landing-pages/components";

/// HTTP client for the landing pages components API.
#[derive(Debug, Clone)]
pub struct HttpComponentsClient {
    endpoint: Url,
    client: Client,
}

impl HttpComponentsClient {
    /// Create a new HTTP client aimed at the configured base URL.
    pub fn new(config: &ComponentsApiConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::Configuration(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;
        let endpoint = base_url
            .join(COMPONENTS_PATH)
            .map_err(|e| AppError::Configuration(format!("Invalid endpoint path: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { endpoint, client })
    }
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    #[serde(default)]
    id: Option<Value>,
}

impl ComponentsClient for HttpComponentsClient {
    fn create_component(&self, template: &ComponentTemplate) -> Result<CreatedComponent, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(template)
            .send()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Api { status: status.as_u16(), body });
        }

        let text = response.text().map_err(|e| AppError::Transport(e.to_string()))?;
        let parsed: CreateResponse = serde_json::from_str(&text)
            .map_err(|_| AppError::Api { status: status.as_u16(), body: text.clone() })?;

        // The service's storage layer assigns ids; depending on the backing
        // store they arrive as strings or numbers.
        let id = match parsed.id {
            Some(Value::String(id)) => id,
            Some(other) => other.to_string(),
            None => "unknown".to_string(),
        };

        Ok(CreatedComponent { id })
    }

    fn endpoint(&self) -> String {
        self.endpoint.to_string()
    }
}
