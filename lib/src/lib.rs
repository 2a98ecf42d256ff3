//! Client library for the Merkaz file sharing service.
//!
//! The [`Client`] talks to the Merkaz HTTP API (login, file listing, download,
//! deletion and suggestions) and keeps the session token in a [`TokenStore`].
//! The [`view`] module exposes the login and dashboard screens as headless
//! view-models, so any front-end only has to provide the host capabilities
//! (routing, confirmation prompt, window opener).
//!
//! ```no_run
//! # async fn example() -> merkaz::Result<()> {
//! use merkaz::auth::Credentials;
//!
//! let client = merkaz::Client::new("http://localhost:8000")?;
//! let session = client.login(&Credentials::new("me@example.com", "secret")).await?;
//! client.token_store().save_token(&session.token)?;
//! let listing = client.list_files(None).await?;
//! for item in listing.items {
//!     println!("{}", item.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::sync::Arc;

pub mod auth;
pub mod builder;
pub mod entry;
mod error;
pub mod files;
mod http;
pub mod suggest;
pub mod token;
pub mod view;

pub use error::Error;
pub use token::TokenStore;

/// Re-export of the `reqwest` crate
pub use reqwest;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The address of a Merkaz server running locally
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// A result returned by the client.
pub type Result<V> = std::result::Result<V, Error>;

/// Client for the Merkaz HTTP API
///
/// The client is cheap to clone, all the clones share the same connection pool and the same token store.
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: reqwest::Url,
    pub(crate) inner: reqwest::Client,
    pub(crate) token_store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Client))
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the provided base url, keeping the token in memory.
    ///
    /// Use the [`ClientBuilder`](crate::builder::ClientBuilder) to configure a persistent token store.
    pub fn new(base_url: impl Into<Cow<'static, str>>) -> Result<Self> {
        builder::ClientBuilder::default()
            .with_base_url(base_url)
            .build()
            .map_err(Error::from)
    }

    /// The base url every endpoint is resolved against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// The store holding the session token.
    pub fn token_store(&self) -> &dyn TokenStore {
        self.token_store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    pub(crate) fn init() {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "merkaz=debug".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    pub(crate) fn client(url: String) -> crate::Client {
        crate::Client::new(url).unwrap()
    }
}
