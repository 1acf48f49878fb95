use super::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientResult};

/// Typed client for the queue backend
///
/// The operations live on [`RestaurantApi`](crate::RestaurantApi).
///
/// # Example
///
/// ```no_run
/// use queue_client::{ClientConfig, RestaurantApi, RestaurantClient};
///
/// # async fn run() -> queue_client::ClientResult<()> {
/// let client = RestaurantClient::remote(&ClientConfig::from_env())?;
/// let ticket = client.join_queue(1, 42).await?;
/// println!("ticket #{}", ticket.ticket_number);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RestaurantClient<H> {
    http: H,
}

impl<H: HttpClient> RestaurantClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &H {
        &self.http
    }
}

impl RestaurantClient<NetworkHttpClient> {
    /// Client talking to `config.base_url` over the network
    pub fn remote(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(&config.base_url, config.timeout)?;
        tracing::debug!(base_url = %http.base_url(), "Remote restaurant client ready");
        Ok(Self::new(http))
    }
}

#[cfg(feature = "in-process")]
impl RestaurantClient<super::http_oneshot::OneshotHttpClient> {
    /// Client dispatching straight into `router`
    ///
    /// Only the path of `config.base_url` is used, e.g. `/api`.
    pub fn local(router: axum::Router, config: &ClientConfig) -> ClientResult<Self> {
        let base_path = base_path(&config.base_url)?;
        Ok(Self::new(super::http_oneshot::OneshotHttpClient::new(
            router,
            &base_path,
            config.timeout,
        )))
    }
}

/// Path component of a base URL; bare paths pass through
#[cfg(feature = "in-process")]
fn base_path(base_url: &str) -> ClientResult<String> {
    if base_url.starts_with('/') {
        return Ok(base_url.to_string());
    }
    reqwest::Url::parse(base_url)
        .map(|url| url.path().to_string())
        .map_err(|e| crate::ClientError::Config(format!("invalid base URL {base_url:?}: {e}")))
}

#[cfg(all(test, feature = "in-process"))]
mod tests {
    use super::*;

    #[test]
    fn test_base_path() {
        assert_eq!(base_path("http://localhost:8000/api").unwrap(), "/api");
        assert_eq!(base_path("/api").unwrap(), "/api");
        assert_eq!(base_path("http://localhost:8000").unwrap(), "/");
        assert!(base_path("not a url").is_err());
    }
}
