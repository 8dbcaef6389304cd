use crate::domain::ports::Notifier;
use crate::utils::error::{Result, SumError};
use reqwest::{Client, StatusCode};

/// Sends one GET to the configured URL and requires a 200 back.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: Client,
    url: String,
}

impl HttpNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Notifier for HttpNotifier {
    async fn notify(&self) -> Result<()> {
        tracing::debug!("Making HTTP request to: {}", self.url);
        let response =
            self.client
                .get(&self.url)
                .send()
                .await
                .map_err(|source| SumError::HttpTransport {
                    url: self.url.clone(),
                    source,
                })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SumError::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }

        tracing::info!(
            "HTTP request to {} was successful. Status: {}",
            self.url,
            status
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_notify_ok() {
        let server = MockServer::start_async().await;
        let health_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(200).body("ok");
            })
            .await;

        let notifier = HttpNotifier::new(server.url("/health"));
        notifier.notify().await.unwrap();

        health_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_notify_non_200_is_error() {
        let server = MockServer::start_async().await;
        let missing_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404);
            })
            .await;

        let notifier = HttpNotifier::new(server.url("/missing"));
        let err = notifier.notify().await.unwrap_err();

        missing_mock.assert_async().await;
        match err {
            SumError::HttpStatus { url, status } => {
                assert_eq!(url, server.url("/missing"));
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_other_success_codes_are_rejected() {
        let server = MockServer::start_async().await;
        let no_content_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(204);
            })
            .await;

        let notifier = HttpNotifier::new(server.url("/health"));
        let err = notifier.notify().await.unwrap_err();

        no_content_mock.assert_async().await;
        assert!(matches!(err, SumError::HttpStatus { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_is_transport_error() {
        let notifier = HttpNotifier::new("http://127.0.0.1:1/health");
        let err = notifier.notify().await.unwrap_err();

        assert!(matches!(err, SumError::HttpTransport { .. }));
        assert!(err
            .to_string()
            .starts_with("Error making HTTP request to http://127.0.0.1:1/health"));
        assert_eq!(err.exit_code(), 3);
    }
}
