//! HTTP client for exchangerate-api.com

use async_trait::async_trait;
use tracing::{debug, warn};
use unitconv_core::ConvertError;

use crate::{ConfigError, CurrencyConfig, LatestRatesResponse, RateSource, RateTable};

/// Fetches live rate tables. No retries: each lookup is one GET, bounded by
/// `CurrencyConfig::timeout`.
pub struct ExchangeRateClient {
    http: reqwest::Client,
    config: CurrencyConfig,
}

impl ExchangeRateClient {
    pub fn new(config: CurrencyConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self::with_http_client(config, http))
    }

    pub fn with_http_client(config: CurrencyConfig, http: reqwest::Client) -> Self {
        ExchangeRateClient { http, config }
    }

    pub fn config(&self) -> &CurrencyConfig {
        &self.config
    }

    fn latest_url(&self, base: &str) -> String {
        format!("{}/{}/latest/{}", self.config.base_url, self.config.api_key, base)
    }

    async fn fetch(&self, base: &str) -> Result<RateTable, ConvertError> {
        // reqwest errors embed the URL, which carries the API key
        let response = self.http.get(self.latest_url(base))
            .send()
            .await
            .map_err(|e| ConvertError::transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::transport(format!("HTTP status {}", status)));
        }

        let body: LatestRatesResponse = response.json()
            .await
            .map_err(|e| ConvertError::transport(format!("malformed rate response: {}", e.without_url())))?;

        body.into_table(base)
    }
}

#[async_trait]
impl RateSource for ExchangeRateClient {
    async fn latest(&self, base: &str) -> Result<RateTable, ConvertError> {
        debug!(base, "requesting latest exchange rates");

        let result = match tokio::time::timeout(self.config.timeout, self.fetch(base)).await {
            Ok(result) => result,
            Err(_) => Err(ConvertError::transport(format!(
                "request timed out after {:?}",
                self.config.timeout
            ))),
        };

        match &result {
            Ok(table) => debug!(base, rates = table.len(), "received exchange rates"),
            Err(e) => warn!(base, code = e.code(), error = %e, "exchange rate lookup failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its base URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/v6", addr)
    }

    /// Accept a connection and never answer
    async fn serve_silence() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        format!("http://{}/v6", addr)
    }

    fn client(base_url: String, timeout: Duration) -> ExchangeRateClient {
        let config = CurrencyConfig::new("test-key")
            .with_base_url(base_url)
            .with_timeout(timeout);
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        ExchangeRateClient::with_http_client(config, http)
    }

    #[test]
    fn test_latest_url() {
        let c = ExchangeRateClient::new(CurrencyConfig::new("abc")).unwrap();
        assert_eq!(c.latest_url("EUR"), "https://v6.exchangerate-api.com/v6/abc/latest/EUR");
    }

    #[tokio::test]
    async fn test_success() {
        let url = serve_once("200 OK", r#"{"result":"success","base_code":"USD","conversion_rates":{"EUR":0.9}}"#).await;
        let table = client(url, Duration::from_secs(5)).latest("USD").await.unwrap();
        assert_eq!(table.base(), "USD");
        assert_eq!(table.rate("EUR").unwrap(), 0.9);
    }

    #[tokio::test]
    async fn test_api_error() {
        let url = serve_once("200 OK", r#"{"result":"error","error-type":"invalid-key"}"#).await;
        let err = client(url, Duration::from_secs(5)).latest("USD").await.unwrap_err();
        assert_eq!(err, ConvertError::api("invalid-key"));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let url = serve_once("503 Service Unavailable", "{}").await;
        let err = client(url, Duration::from_secs(5)).latest("USD").await.unwrap_err();
        assert_eq!(err, ConvertError::transport("HTTP status 503 Service Unavailable"));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let url = serve_once("200 OK", "<html>not json</html>").await;
        let err = client(url, Duration::from_secs(5)).latest("USD").await.unwrap_err();
        match err {
            ConvertError::TransportError { reason } => {
                assert!(reason.starts_with("malformed rate response"), "{}", reason);
                assert!(!reason.contains("test-key"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout() {
        let url = serve_silence().await;
        let err = client(url, Duration::from_millis(100)).latest("USD").await.unwrap_err();
        assert!(matches!(err, ConvertError::TransportError { .. }), "{:?}", err);
    }

    #[tokio::test]
    async fn test_connection_refused_hides_key() {
        // bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{}/v6", addr), Duration::from_secs(5))
            .latest("USD")
            .await
            .unwrap_err();
        match err {
            ConvertError::TransportError { reason } => assert!(!reason.contains("test-key"), "{}", reason),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
