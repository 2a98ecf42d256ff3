impl crate::Client {
    /// Delete a remote file or folder
    ///
    /// The server moves the item to its trash, nothing is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the item cannot be deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn example(client: &merkaz::Client) -> Result<(), merkaz::Error> {
    /// client.delete_item("reports/old.pdf").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, path: &str) -> crate::Result<()> {
        self.delete_request(self.item_endpoint(&["api", "delete"], path))
            .await
    }
}
