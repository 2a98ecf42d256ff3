//! Feedback sent by the users to the administrators.

#[derive(serde::Serialize)]
struct Params<'a> {
    suggestion: &'a str,
}

impl crate::Client {
    /// Send a suggestion to the administrators
    ///
    /// The server may refuse it when the user sent another suggestion recently.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the suggestion is rejected.
    #[tracing::instrument(skip_all)]
    pub async fn submit_suggestion(&self, suggestion: &str) -> crate::Result<()> {
        self.post_request_empty(self.endpoint(["api", "suggest"]), &Params { suggestion })
            .await
    }
}
