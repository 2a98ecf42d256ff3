//! The errors returned by the client

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client could not be built
    #[error("unable to build client")]
    Builder(#[from] crate::builder::Error),
    /// The server answered with a non successful status code.
    ///
    /// The message is the `error` field of the response payload, when the server provided one.
    #[error("server responded with status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },
    /// The request could not be sent or the response could not be read
    #[error("network error")]
    Reqwest(#[from] reqwest::Error),
    /// Unable to parse a JSON response
    #[error("unable to decode response")]
    SerdeJson(#[from] serde_json::Error),
    /// Error while writing a downloaded file
    #[error("unable to write downloaded content")]
    Download(#[source] std::io::Error),
    /// Error while reading or writing the token storage
    #[error("unable to access token storage")]
    TokenStore(#[source] std::io::Error),
    /// The password doesn't match the server policy
    #[error(transparent)]
    Password(#[from] crate::auth::register::PasswordError),
}

impl Error {
    /// The http status code returned by the server, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Reqwest(inner) => inner.status().map(|code| code.as_u16()),
            _ => None,
        }
    }

    /// The message returned by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
