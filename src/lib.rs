//! lp-seed: Seed the landing pages service with its built-in component templates.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::seed;
use domain::builtin_templates;
use services::HttpComponentsClient;

pub use app::commands::seed::SeedReport;
pub use domain::{AppError, ComponentsApiConfig};

/// Seed the default endpoint with every built-in component template.
///
/// Per-item failures are absorbed into the returned report; the only
/// error path is failing to construct the HTTP client.
pub fn seed() -> Result<SeedReport, AppError> {
    seed_with_config(&ComponentsApiConfig::default())
}

/// Seed a specific endpoint. Used by tests to aim at a local double.
pub fn seed_with_config(config: &ComponentsApiConfig) -> Result<SeedReport, AppError> {
    let client = HttpComponentsClient::new(config)?;
    Ok(seed::execute(&client, &builtin_templates()))
}
