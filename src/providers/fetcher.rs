use crate::core::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, uri: &Url) -> Result<String, FetchError>;
}

/// Downloads pages with a single GET; retrying is up to the caller.
pub struct HttpPageFetcher {
    timeout: Duration,
}

impl HttpPageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    #[instrument(name = "PageFetch", skip(self), fields(uri = %uri))]
    async fn fetch(&self, uri: &Url) -> Result<String, FetchError> {
        let fail = |e: reqwest::Error| FetchError {
            uri: uri.to_string(),
            message: e.to_string(),
        };

        let client = reqwest::Client::builder()
            .user_agent("dobs/0.2")
            .timeout(self.timeout)
            .build()
            .map_err(fail)?;

        let response = client
            .get(uri.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fail)?;
        debug!(status = %response.status(), "Received page response");

        response.text().await.map_err(fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn page_url(server: &MockServer) -> Url {
        Url::parse(&format!("{}/rates", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rates"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = HttpPageFetcher::new();
        let body = fetcher.fetch(&page_url(&mock_server).await).await.unwrap();

        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rates"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = HttpPageFetcher::new();
        let url = page_url(&mock_server).await;
        let err = fetcher.fetch(&url).await.unwrap_err();

        assert_eq!(err.uri, url.to_string());
        assert!(err.to_string().starts_with("Problem loading"));
        assert!(err.message.contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let fetcher = HttpPageFetcher::with_timeout(Duration::from_millis(50));
        let result = fetcher.fetch(&page_url(&mock_server).await).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Nothing listens on the port once the server is dropped.
        let url = {
            let mock_server = MockServer::start().await;
            page_url(&mock_server).await
        };

        let result = HttpPageFetcher::new().fetch(&url).await;
        assert!(result.is_err());
    }
}
