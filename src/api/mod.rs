// Re-export the API module components
pub use self::{
    client::{ApiClient, ApiClientBuilder, MediaClient, API_KEY_HEADER, DEFAULT_API_ENDPOINT},
    errors::{ApiClientError, ErrorCategory},
    models::{join_tags, AttributionDetails, ImportRequest, UploadRequest},
};

// Module declarations
mod client;
mod errors;
mod models;
