use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use crate::token::{MemoryTokenStore, TokenStore};

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
    /// Returned when the base URL is not an absolute http(s) URL.
    #[error("invalid base url {0:?}: {1}")]
    InvalidBaseUrl(String, String),
}

fn parse_base_url(value: &str) -> Result<reqwest::Url, Error> {
    let url = reqwest::Url::parse(value)
        .map_err(|err| Error::InvalidBaseUrl(value.to_string(), err.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidBaseUrl(
            value.to_string(),
            "expected an http or https url".into(),
        ));
    }
    Ok(url)
}

fn duration_from_env() -> Option<Duration> {
    let value = std::env::var("MERKAZ_TIMEOUT").ok()?;
    match value.parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("invalid value {value:?} for MERKAZ_TIMEOUT, ignoring: {err}");
            None
        }
    }
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the base URL, the store keeping the session token, a request timeout
/// and optionally customizing the inner `reqwest::ClientBuilder`.
///
/// ```
/// use merkaz::builder::ClientBuilder;
/// use merkaz::token::MemoryTokenStore;
///
/// let _client = ClientBuilder::default()
///    .with_base_url("http://files.example.com")
///    .with_token_store(MemoryTokenStore::default())
///    .build()
///    .expect("unable to build http client");
/// ```
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    timeout: Option<Duration>,
    token_store: Option<Arc<dyn TokenStore>>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(ClientBuilder))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Base URL is set to [`DEFAULT_BASE_URL`](crate::DEFAULT_BASE_URL).
    /// - The token is kept in memory.
    /// - No timeout.
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(crate::DEFAULT_BASE_URL),
            client_builder: None,
            timeout: None,
            token_store: None,
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `MERKAZ_BASE_URL` for the endpoint.
    /// - Uses `MERKAZ_TIMEOUT` for the request timeout, in milliseconds. Invalid values are ignored.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`](crate::DEFAULT_BASE_URL) if none is specified.
    pub fn from_env() -> Self {
        let base_url = std::env::var("MERKAZ_BASE_URL")
            .ok()
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(crate::DEFAULT_BASE_URL));

        Self {
            base_url,
            client_builder: None,
            timeout: duration_from_env(),
            token_store: None,
        }
    }
}

impl ClientBuilder {
    /// Sets a custom base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = base_url.into();
    }

    /// Sets a custom base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets the request timeout.
    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = Some(value);
    }

    /// Sets the request timeout and returns the modified builder.
    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.set_timeout(value);
        self
    }

    /// Sets the store keeping the session token.
    pub fn set_token_store<S: TokenStore + 'static>(&mut self, store: S) {
        let store: Arc<dyn TokenStore> = Arc::new(store);
        self.token_store = Some(store);
    }

    /// Sets the store keeping the session token and returns the modified builder.
    pub fn with_token_store<S: TokenStore + 'static>(mut self, store: S) -> Self {
        self.set_token_store(store);
        self
    }

    /// Shares an existing token store with the client.
    pub fn with_shared_token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if the base URL can't be parsed.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let mut builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let token_store: Arc<dyn TokenStore> = match self.token_store {
            Some(store) => store,
            None => Arc::new(MemoryTokenStore::default()),
        };
        Ok(crate::Client {
            base_url: parse_base_url(&self.base_url)?,
            inner: builder.build()?,
            token_store,
        })
    }
}
