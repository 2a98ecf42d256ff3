//! Authentication against the Merkaz server.

pub mod login;
pub mod register;

/// The email and password identifying a user.
#[derive(Clone, serde::Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("email", &self.email)
            .field("password", &"*****")
            .finish()
    }
}

impl Credentials {
    pub fn new<E: Into<String>, P: Into<String>>(email: E, password: P) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
