//! Registration of a new user, pending the approval of an administrator.

use super::Credentials;

const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// The minimum length of a password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The first rule a password doesn't follow
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PasswordError {
    #[error("Password must be at least 8 characters long.")]
    TooShort,
    #[error("Password must contain a lowercase letter.")]
    MissingLowercase,
    #[error("Password must contain an uppercase letter.")]
    MissingUppercase,
    #[error("Password must contain a number.")]
    MissingDigit,
    #[error("Password must contain a special character.")]
    MissingSpecial,
}

/// Checks a password against the policy enforced by the server.
///
/// ```
/// use merkaz::auth::register::{check_password, PasswordError};
///
/// assert_eq!(check_password("Sh0rt!"), Err(PasswordError::TooShort));
/// assert!(check_password("C0rrect-Horse").is_ok());
/// ```
pub fn check_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        Err(PasswordError::TooShort)
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        Err(PasswordError::MissingLowercase)
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Err(PasswordError::MissingUppercase)
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Err(PasswordError::MissingDigit)
    } else if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        Err(PasswordError::MissingSpecial)
    } else {
        Ok(())
    }
}

impl crate::Client {
    /// Registers a new user. The account stays inactive until an administrator approves it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Password`] without contacting the server if the password is too weak.
    /// Returns a [`crate::Error`] if the server rejects the registration.
    #[tracing::instrument(skip_all, fields(email = %credentials.email))]
    pub async fn register(&self, credentials: &Credentials) -> crate::Result<()> {
        check_password(&credentials.password)?;
        self.post_request_empty(self.endpoint(["register"]), credentials)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::{check_password, PasswordError};
    use crate::auth::Credentials;
    use mockito::Matcher;

    #[test]
    fn password_rules_in_order() {
        assert_eq!(check_password(""), Err(PasswordError::TooShort));
        assert_eq!(check_password("ABCDEFGH"), Err(PasswordError::MissingLowercase));
        assert_eq!(check_password("abcdefgh"), Err(PasswordError::MissingUppercase));
        assert_eq!(check_password("Abcdefgh"), Err(PasswordError::MissingDigit));
        assert_eq!(check_password("Abcdefg1"), Err(PasswordError::MissingSpecial));
        assert_eq!(check_password("Abcdef1\\"), Ok(()));
        assert_eq!(check_password("Abcdef1 "), Err(PasswordError::MissingSpecial));
    }

    #[test]
    fn password_error_message() {
        assert_eq!(
            PasswordError::MissingDigit.to_string(),
            "Password must contain a number."
        );
    }

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/register")
            .match_body(Matcher::Json(serde_json::json!({
                "email": "new@example.com",
                "password": "C0rrect-Horse",
            })))
            .with_status(201)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        client
            .register(&Credentials::new("new@example.com", "C0rrect-Horse"))
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn weak_password_is_not_sent() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/register")
            .expect(0)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let error = client
            .register(&Credentials::new("new@example.com", "weak"))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            crate::Error::Password(PasswordError::TooShort)
        ));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn already_registered() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/register")
            .with_status(409)
            .with_body(r#"{"error": "This email is already registered, pending approval, or has been denied."}"#)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let error = client
            .register(&Credentials::new("old@example.com", "C0rrect-Horse"))
            .await
            .unwrap_err();
        assert_eq!(error.status(), Some(409));
        m.assert_async().await;
    }
}
