use super::Credentials;

/// Response of a successful login
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginResponse {
    /// The session token, to be sent with the following requests
    pub token: String,
    pub message: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl crate::Client {
    /// Authenticates the user with the provided credentials
    ///
    /// The token isn't stored by this method, see [`TokenStore::save_token`](crate::TokenStore::save_token).
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the credentials are rejected or if the response doesn't contain a token.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn example(client: &merkaz::Client) -> Result<(), merkaz::Error> {
    /// use merkaz::auth::Credentials;
    ///
    /// let res = client.login(&Credentials::new("me@example.com", "secret")).await?;
    /// client.token_store().save_token(&res.token)?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> crate::Result<LoginResponse> {
        self.post_request(self.endpoint(["login"]), credentials)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/login")
            .match_body(Matcher::Json(serde_json::json!({
                "email": "user@example.com",
                "password": "secret",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
    "message": "Login successful",
    "email": "user@example.com",
    "role": "user",
    "token": "jwt-123"
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let result = client
            .login(&Credentials::new("user@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(result.token, "jwt-123");
        assert_eq!(result.role.as_deref(), Some("user"));
        assert!(!client.token_store().is_logged_in());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn invalid_credentials() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Invalid credentials"}"#)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let error = client
            .login(&Credentials::new("user@example.com", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(error.status(), Some(401));
        assert_eq!(error.server_message(), Some("Invalid credentials"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn missing_token() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Login successful"}"#)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let error = client
            .login(&Credentials::new("user@example.com", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(error, crate::Error::SerdeJson(_)));
        m.assert_async().await;
    }
}
