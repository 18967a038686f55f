//! Issues the single authenticated request for one [`WeatherQuery`] against
//! the Meteomatics API and surfaces transport failures immediately. No
//! retries, no caching: one invocation, one network call.

use crate::weather::error::FetchError;
use crate::weather::query::WeatherQuery;
use log::{info, warn};
use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://api.meteomatics.com";

/// API credentials, passed in explicitly by the caller.
///
/// Core logic never reads credentials from ambient process state; the one
/// exception is the [`Credentials::from_env`] convenience intended for
/// binaries and demos.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads `METEOMATICS_USERNAME` and `METEOMATICS_PASSWORD` from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`std::env::VarError`] when either variable is
    /// missing or not unicode.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            username: std::env::var("METEOMATICS_USERNAME")?,
            password: std::env::var("METEOMATICS_PASSWORD")?,
        })
    }
}

/// Sends weather queries over HTTP with basic authentication.
pub struct WeatherFetcher {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

impl WeatherFetcher {
    /// Creates a fetcher against the production Meteomatics endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Creates a fetcher against an alternative endpoint. Used by tests and
    /// self-hosted proxies.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            credentials,
            base_url: base_url.into(),
        }
    }

    /// Executes one query and returns the raw response body on HTTP 2xx.
    ///
    /// The body is returned undecoded; schema validation belongs to the
    /// extraction step, which turns it into typed series.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::HttpStatus`] carrying the status code for any
    /// non-2xx response, [`FetchError::NetworkRequest`] for transport
    /// failures, and [`FetchError::BodyRead`] when the connection drops while
    /// the body is being read.
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<String, FetchError> {
        let url = self.request_url(query);
        info!("Requesting weather data from {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        response
            .text()
            .await
            .map_err(|e| FetchError::BodyRead(url, e))
    }

    fn request_url(&self, query: &WeatherQuery) -> String {
        format!("{}{}", self.base_url, query.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::LatLon;
    use crate::types::time_range::TimeRange;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn query() -> WeatherQuery {
        WeatherQuery::new(
            LatLon(37.7749, -122.4194),
            TimeRange::new(2000, 2003).unwrap(),
        )
    }

    /// Serves exactly one canned HTTP response on a local socket and returns
    /// the base URL to reach it. The whole pack tests HTTP against real
    /// sockets, so this stays dependency-free.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn request_url_joins_base_and_path() {
        let fetcher = WeatherFetcher::new(Credentials::new("user", "pass"));
        let url = fetcher.request_url(&query());
        assert!(url.starts_with("https://api.meteomatics.com/2000-07-22T15:00:00Z--"));
        assert!(url.ends_with("/37.7749,-122.4194/json?model=mix"));
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let base_url = serve_once("200 OK", r#"{"data": []}"#).await;
        let fetcher = WeatherFetcher::with_base_url(Credentials::new("user", "pass"), base_url);
        let body = fetcher.fetch(&query()).await.unwrap();
        assert_eq!(body, r#"{"data": []}"#);
    }

    #[tokio::test]
    async fn forbidden_surfaces_the_status_code() {
        let base_url = serve_once("403 Forbidden", "").await;
        let fetcher = WeatherFetcher::with_base_url(Credentials::new("user", "bad-pass"), base_url);
        let err = fetcher.fetch(&query()).await.unwrap_err();
        match err {
            FetchError::HttpStatus { status, url, .. } => {
                assert_eq!(status.as_u16(), 403);
                assert!(url.contains("/json?model=mix"));
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        // Bind a port, then drop the listener so the connection is refused.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let fetcher = WeatherFetcher::with_base_url(Credentials::new("user", "pass"), base_url);
        let err = fetcher.fetch(&query()).await.unwrap_err();
        assert!(matches!(err, FetchError::NetworkRequest(_, _)));
    }
}
