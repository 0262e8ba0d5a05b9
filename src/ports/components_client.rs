//! Components API client port definition.

use crate::domain::{AppError, ComponentTemplate};

/// Response from component template creation.
#[derive(Debug, Clone)]
pub struct CreatedComponent {
    /// Identifier assigned by the service; `unknown` when the response
    /// omits one.
    pub id: String,
}

/// Port for landing pages components API operations.
pub trait ComponentsClient {
    /// Register a single component template with the service.
    fn create_component(&self, template: &ComponentTemplate) -> Result<CreatedComponent, AppError>;

    /// Endpoint that create requests are sent to, for operator output.
    fn endpoint(&self) -> String;
}
