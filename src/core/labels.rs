//! Label directory access
//!
//! The selector never talks to a transport directly. It depends on the
//! [`LabelSource`] capability injected at construction time: [`HttpLabelSource`]
//! is the production implementation speaking the fleet server's REST contract,
//! and [`StaticLabelSource`] is the in-memory stand-in for tests and outage
//! simulation.

use crate::core::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Fixed directory endpoint. The selector must never request any other path.
pub const LABELS_ENDPOINT: &str = "/clients/labels";

/// Default timeout for directory requests
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// A client label as returned by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Wire shape of the directory listing: `{"items": [{"name": ...}, ...]}`.
#[derive(Debug, Deserialize)]
struct LabelListing {
    #[serde(default)]
    items: Vec<Label>,
}

/// Abstract data-fetch capability behind the label dropdown.
///
/// Injected at construction so the GUI shell, the CLI, and the tests can all
/// share the same component logic against different transports.
#[async_trait]
pub trait LabelSource: Send + Sync {
    /// Fetches the full set of known client labels, in directory order.
    async fn fetch_labels(&self) -> Result<Vec<Label>>;
}

/// Directory client for a fleet server speaking the REST contract.
#[derive(Debug, Clone)]
pub struct HttpLabelSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpLabelSource {
    pub fn new(base_url: Url) -> Result<Self> {
        // Schemes like mailto: cannot carry the endpoint path
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidServerUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Parses `base` and builds a source for it.
    pub fn for_server(base: &str) -> Result<Self> {
        let base_url = base
            .parse::<Url>()
            .map_err(|_| Error::InvalidServerUrl(base.to_string()))?;
        Self::new(base_url)
    }

    /// Resolves the single endpoint this client is allowed to request.
    ///
    /// The leading slash makes the join absolute, so a base URL carrying a
    /// path prefix still resolves to exactly `/clients/labels` on that host.
    fn endpoint(&self) -> Result<Url> {
        self.base_url
            .join(LABELS_ENDPOINT)
            .map_err(|_| Error::InvalidServerUrl(self.base_url.to_string()))
    }
}

#[async_trait]
impl LabelSource for HttpLabelSource {
    async fn fetch_labels(&self) -> Result<Vec<Label>> {
        let endpoint = self.endpoint()?;
        tracing::debug!(%endpoint, "requesting client labels");

        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| Error::Directory {
                message: e.to_string(),
                status: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Directory {
                message: format!("directory service returned {status}"),
                status: Some(status.as_u16()),
            });
        }

        let listing: LabelListing = response.json().await.map_err(|e| Error::Directory {
            message: format!("malformed label listing: {e}"),
            status: Some(status.as_u16()),
        })?;

        tracing::debug!(count = listing.items.len(), "client labels received");
        Ok(listing.items)
    }
}

/// In-memory label source for tests and outage simulation.
///
/// Returns its labels in construction order, matching the directory contract.
/// A source built with [`StaticLabelSource::failing`] reports the given error
/// on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticLabelSource {
    labels: Vec<Label>,
    failure: Option<String>,
}

impl StaticLabelSource {
    pub fn new(names: &[&str]) -> Self {
        Self {
            labels: names.iter().map(|name| Label::new(*name)).collect(),
            failure: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            labels: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl LabelSource for StaticLabelSource {
    async fn fetch_labels(&self) -> Result<Vec<Label>> {
        match &self.failure {
            Some(message) => Err(Error::Directory {
                message: message.clone(),
                status: None,
            }),
            None => Ok(self.labels.clone()),
        }
    }
}
