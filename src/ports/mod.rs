mod components_client;

pub use components_client::{ComponentsClient, CreatedComponent};
