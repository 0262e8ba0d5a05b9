mod components_client_http;

pub use components_client_http::HttpComponentsClient;
