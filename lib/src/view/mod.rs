//! Headless view-models for the login and dashboard screens.
//!
//! The views hold the state rendered by a front-end and map each user action to a single
//! request. The host capabilities they need are injected: a [`Navigator`] to change screen
//! and a [`Window`] to ask for a confirmation or open a link.

pub mod dashboard;
pub mod login;

pub use dashboard::DashboardView;
pub use login::LoginView;

/// The screens of the application
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Changes the displayed screen.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Capabilities of the window hosting the views.
#[async_trait::async_trait]
pub trait Window: Send + Sync {
    /// Asks the user a yes/no question, blocking until answered.
    fn confirm(&self, message: &str) -> bool;

    /// Opens the url in a new tab or window. Nothing is reported back.
    async fn open(&self, url: reqwest::Url);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlashKind {
    Success,
}

/// A transient message displayed to the user
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }
}
