use std::io::Write;

use crate::Error;

impl crate::Client {
    /// The url to download a remote file, as opened by a browser.
    ///
    /// ```
    /// let client = merkaz::Client::new("http://localhost:8000").unwrap();
    /// let url = client.download_url("reports/q1 2024.pdf");
    /// assert_eq!(url.as_str(), "http://localhost:8000/api/download/reports/q1%202024.pdf");
    /// ```
    pub fn download_url(&self, path: &str) -> reqwest::Url {
        self.item_endpoint(&["api", "download"], path)
    }

    /// Download a remote file in the provided writer
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the file cannot be fetched or written.
    pub async fn download_file<W: Write>(&self, path: &str, writer: W) -> crate::Result<usize> {
        self.download(self.download_url(path), writer).await
    }

    /// Download the content of an url in the provided writer, authenticated with the stored token.
    ///
    /// Returns the number of bytes written.
    #[tracing::instrument(skip(self, writer))]
    pub async fn download<W: Write>(&self, url: reqwest::Url, mut writer: W) -> crate::Result<usize> {
        let mut res = self.get_stream(url).await?;
        let mut size = 0;
        while let Some(chunk) = res.chunk().await? {
            writer.write_all(chunk.as_ref()).map_err(Error::Download)?;
            size += chunk.len();
        }
        writer.flush().map_err(Error::Download)?;
        tracing::debug!("downloaded {size} bytes");
        Ok(size)
    }
}
