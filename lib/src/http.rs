//! Request helpers shared by all the endpoints.

use crate::{Client, Error};

/// Payload sent by the server along with a non successful status, like `{"error": "Invalid credentials"}`
#[derive(Debug, serde::Deserialize)]
struct ErrorPayload {
    error: Option<String>,
    message: Option<String>,
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if status.is_success() {
        return Ok(res);
    }
    let body = res.bytes().await.unwrap_or_default();
    let message = serde_json::from_slice::<ErrorPayload>(&body)
        .ok()
        .and_then(|payload| payload.error.or(payload.message));
    Err(Error::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let res = check_status(res).await?;
    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(Error::from)
}

impl Client {
    /// Builds the url of an endpoint, each segment being percent encoded.
    pub(crate) fn endpoint<'a, I>(&self, segments: I) -> reqwest::Url
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.base_url.clone();
        // the builder rejects the urls that cannot be a base
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(segments.into_iter().filter(|item| !item.is_empty()));
        }
        url
    }

    /// Builds the url of an endpoint targeting a remote item, keeping the `/` of the item path.
    pub(crate) fn item_endpoint(&self, prefix: &[&str], item_path: &str) -> reqwest::Url {
        self.endpoint(prefix.iter().copied().chain(item_path.split('/')))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token_store.get_token() {
            Some(token) if !token.is_empty() => req.bearer_auth(token),
            _ => req,
        }
    }

    #[tracing::instrument(name = "get", skip_all, fields(url = %url))]
    pub(crate) async fn get_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        url: reqwest::Url,
        params: &P,
    ) -> Result<T, Error> {
        tracing::debug!("calling {url}");
        let res = self
            .authorize(self.inner.get(url))
            .query(params)
            .send()
            .await?;
        read_response(res).await
    }

    #[tracing::instrument(name = "post", skip_all, fields(url = %url))]
    pub(crate) async fn post_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        url: reqwest::Url,
        payload: &P,
    ) -> Result<T, Error> {
        tracing::debug!("calling {url}");
        let res = self
            .authorize(self.inner.post(url))
            .json(payload)
            .send()
            .await?;
        read_response(res).await
    }

    /// Sends a json payload, the body of the response is ignored.
    #[tracing::instrument(name = "post", skip_all, fields(url = %url))]
    pub(crate) async fn post_request_empty<P: serde::Serialize>(
        &self,
        url: reqwest::Url,
        payload: &P,
    ) -> Result<(), Error> {
        tracing::debug!("calling {url}");
        let res = self
            .authorize(self.inner.post(url))
            .json(payload)
            .send()
            .await?;
        check_status(res).await.map(|_| ())
    }

    #[tracing::instrument(name = "delete", skip_all, fields(url = %url))]
    pub(crate) async fn delete_request(&self, url: reqwest::Url) -> Result<(), Error> {
        tracing::debug!("calling {url}");
        let res = self.authorize(self.inner.delete(url)).send().await?;
        check_status(res).await.map(|_| ())
    }

    /// Sends a get request and returns the response to be streamed.
    #[tracing::instrument(name = "stream", skip_all, fields(url = %url))]
    pub(crate) async fn get_stream(&self, url: reqwest::Url) -> Result<reqwest::Response, Error> {
        tracing::debug!("calling {url}");
        let res = self.authorize(self.inner.get(url)).send().await?;
        check_status(res).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    #[test]
    fn endpoint_encodes_segments() {
        let client = crate::Client::new("http://localhost:8000").unwrap();
        let url = client.item_endpoint(&["api", "download"], "docs/my report.pdf");
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/download/docs/my%20report.pdf"
        );
    }

    #[test]
    fn endpoint_keeps_base_prefix() {
        let client = crate::Client::new("http://localhost:8000/merkaz/").unwrap();
        let url = client.item_endpoint(&["api", "delete"], "/a/b.txt");
        assert_eq!(url.as_str(), "http://localhost:8000/merkaz/api/delete/a/b.txt");
    }

    #[tokio::test]
    async fn token_is_sent_when_stored() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/api/delete/a.txt")
            .match_header("authorization", "Bearer my-token")
            .with_status(200)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        client.token_store().save_token("my-token").unwrap();
        client.delete_item("a.txt").await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn no_token_no_header() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/api/delete/a.txt")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        client.delete_item("a.txt").await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn error_payload_is_kept() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/api/delete/a.txt")
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Forbidden"}"#)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let err = client.delete_item("a.txt").await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.server_message(), Some("Forbidden"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn error_without_payload() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/api/delete/a.txt")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let err = client.delete_item("a.txt").await.unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Status {
                status: 500,
                message: None
            }
        ));
        m.assert_async().await;
    }
}
