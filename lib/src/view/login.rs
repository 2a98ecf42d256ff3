use super::{Navigator, Route};
use crate::auth::Credentials;
use crate::Client;

pub const LOGIN_SUCCESS: &str = "Login successful";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// The login screen
///
/// On success the token is saved in the client token store and the user is sent to the dashboard.
/// Any failure is reported with the same generic message, whatever the server answered.
pub struct LoginView<N> {
    client: Client,
    navigator: N,
    pub email: String,
    pub password: String,
    /// Message displayed on successful login
    pub message: String,
    /// Error message displayed on failed login
    pub error: String,
    pub show_password: bool,
}

impl<N: Navigator> LoginView<N> {
    pub fn new(client: Client, navigator: N) -> Self {
        Self {
            client,
            navigator,
            email: String::new(),
            password: String::new(),
            message: String::new(),
            error: String::new(),
            show_password: false,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// The password as it should be rendered in the form
    pub fn displayed_password(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    /// Sends the credentials, as typed, to the server.
    #[tracing::instrument(skip_all, fields(email = %self.email))]
    pub async fn on_submit(&mut self) {
        let credentials = Credentials::new(self.email.as_str(), self.password.as_str());
        let result = match self.client.login(&credentials).await {
            Ok(res) => self.client.token_store().save_token(&res.token),
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                tracing::info!("logged in");
                self.message = LOGIN_SUCCESS.to_string();
                self.navigator.navigate(Route::Dashboard);
            }
            Err(err) => {
                tracing::error!(message = "login failed", cause = %err);
                self.error = INVALID_CREDENTIALS.to_string();
            }
        }
    }
}
