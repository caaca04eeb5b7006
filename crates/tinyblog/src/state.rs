//! Shared application state.

use tinyblog_client::BlogClient;

/// State handed to every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client for the upstream posts API.
    pub client: BlogClient,
    /// Revalidation interval for build-time pages, in seconds.
    pub revalidate: Option<u32>,
}

impl AppState {
    pub fn new(client: BlogClient, revalidate: Option<u32>) -> Self {
        Self { client, revalidate }
    }
}
