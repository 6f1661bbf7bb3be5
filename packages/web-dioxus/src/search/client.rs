//! HTTP client for the external search service.

use std::time::Duration;

use crate::types::{ProviderRecord, SearchQuery};

/// Per-request deadline; a hung search fails like any other transport error.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for search operations. Transport failures, non-2xx statuses,
/// and undecodable bodies all land here; the caller reports the failure and
/// keeps whatever results were already on screen.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Search service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for making search requests.
#[derive(Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    /// Create a new search client.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POST the query and decode the matched providers.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<ProviderRecord>, SearchError> {
        let req = self.client.post(&self.endpoint).json(query);

        // reqwest has no timeout API on wasm; there the browser governs it.
        #[cfg(not(target_arch = "wasm32"))]
        let req = req.timeout(SEARCH_TIMEOUT);

        let response = req.send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let providers: Vec<ProviderRecord> = response.json().await?;
        Ok(providers)
    }
}

/// Create a client for server-side requests (direct to the search service).
/// The endpoint comes from `SEARCH_API_URL`, with a documented localhost
/// default for development; every search goes through here via the server
/// function, so this is the single place the endpoint is resolved.
#[cfg(feature = "server")]
pub fn server_client() -> SearchClient {
    let url = std::env::var("SEARCH_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000/providers/search".to_string());
    SearchClient::new(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn transport_failure_is_an_error_not_a_panic() {
        // nothing listens on the discard port; connection is refused fast
        let client = SearchClient::new("http://127.0.0.1:9/providers/search");
        let result = client.search(&SearchQuery::default()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, SearchError::Network(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn status_error_names_the_status() {
        let err = SearchError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("500"));
    }
}
