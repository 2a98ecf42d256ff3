use crate::entry::Listing;

#[derive(serde::Serialize)]
struct Params<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
}

impl crate::Client {
    /// List the content of a remote folder
    ///
    /// When `path` is `None` or empty, the shared root is listed. The missing fields of the
    /// response get their default value, an absent `items` field giving an empty listing.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the folder cannot be listed.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn example(client: &merkaz::Client) -> Result<(), merkaz::Error> {
    /// let listing = client.list_files(Some("reports")).await?;
    /// for item in listing.items {
    ///     println!("{} {}", if item.is_folder { "d" } else { "-" }, item.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn list_files(&self, path: Option<&str>) -> crate::Result<Listing> {
        let params = Params {
            path: path.filter(|value| !value.is_empty()),
        };
        self.get_request(self.endpoint(["api", "files"]), &params)
            .await
    }
}
