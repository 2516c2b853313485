//! Main SlideClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::Error;
use crate::model::SlideHeader;

/// Client for a slide server's header endpoint.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks safely.
///
/// # Example
///
/// ```ignore
/// use slidemeta_lib::SlideClient;
///
/// let client = SlideClient::builder()
///     .base_url("https://histo.example.org")
///     .build()?;
///
/// let header = client.header("brains", 42, "raw").await?;
/// let entries = header.entries();
/// ```
#[derive(Clone, Debug)]
pub struct SlideClient {
    inner: Arc<SlideClientInner>,
}

#[derive(Debug)]
struct SlideClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl SlideClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> SlideClientBuilder<Missing> {
        SlideClientBuilder::new()
    }

    /// Fetches the header document for one slide image resource.
    ///
    /// `resource` names the image resource the header belongs to (`raw`
    /// for the primary image). The endpoint serves `{}` or an empty body
    /// when no header is available; both parse to an all-empty
    /// [`SlideHeader`], which is a valid empty result, not an error.
    pub async fn header(
        &self,
        project: &str,
        slide_id: u32,
        resource: &str,
    ) -> Result<SlideHeader, Error> {
        let url = format!(
            "{}/dzi/download/{}/slide_{}_{}_header.json",
            self.inner.base_url.as_str().trim_end_matches('/'),
            project,
            slide_id,
            resource
        );

        let mut request = self.inner.http_client.get(&url);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        if response.status().is_success() {
            let body = response.text().await?;
            if body.trim().is_empty() {
                return Ok(SlideHeader::default());
            }
            serde_json::from_str(&body).map_err(|e| Error::parse_with_body(e.to_string(), body))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(Error::Http { status, message })
        }
    }

    /// Returns the base URL of the slide server.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`SlideClient`].
///
/// Uses the typestate pattern so the required `base_url` must be set
/// before `build` is available.
pub struct SlideClientBuilder<U> {
    base_url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl SlideClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the slide server base URL.
    pub fn base_url(self, url: impl Into<String>) -> SlideClientBuilder<Set<String>> {
        SlideClientBuilder {
            base_url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for SlideClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> SlideClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl SlideClientBuilder<Set<String>> {
    /// Builds the [`SlideClient`].
    ///
    /// Only available once `base_url` has been set. Fails with
    /// [`Error::InvalidUrl`] if the URL does not parse.
    pub fn build(self) -> Result<SlideClient, Error> {
        let raw = self.base_url.0;
        let base_url =
            Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(SlideClient {
            inner: Arc::new(SlideClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_invalid_url() {
        let err = SlideClient::builder()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_build_keeps_base_url() {
        let client = SlideClient::builder()
            .base_url("https://histo.example.org/phas")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "https://histo.example.org/phas");
    }
}
