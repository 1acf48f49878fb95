// queue-client/src/client/http_oneshot.rs
// Oneshot HTTP 客户端 - 内存通信 (Local Mode)
//
// 需要启用 "in-process" feature

use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::HttpClient;
use super::response::decode;
use crate::{ClientError, ClientResult};

/// Oneshot HTTP 客户端 (内存调用)
///
/// 使用 Tower Service 的 oneshot 模式直接调用 Router，
/// 适用于同进程的服务器-客户端通信，零网络开销。
///
/// # Example
///
/// ```ignore
/// use queue_client::OneshotHttpClient;
///
/// let router = queue_mock::test_router(queue_mock::Seed::demo());
/// let client = OneshotHttpClient::new(router, "/api", Duration::from_secs(5));
///
/// let items: Vec<RestaurantItem> = client.get("restaurants").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    base_path: String,
    timeout: Duration,
}

impl OneshotHttpClient {
    /// # Arguments
    /// * `router` - 已初始化的 Axum Router (with_state 已调用)
    /// * `base_path` - 路由前缀, e.g. `/api`
    pub fn new(router: Router, base_path: &str, timeout: Duration) -> Self {
        Self {
            router,
            base_path: base_path.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn uri(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path.trim_start_matches('/'))
    }

    fn build_request(&self, method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(self.uri(path))
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn build_request_with_body<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let body_bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Body::from(body_bytes))
    }

    /// 执行请求并处理响应
    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let router = self.router.clone();
        let call = async move {
            let response = router
                .oneshot(request)
                .await
                .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

            let status = response.status();
            let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;
            Ok::<_, ClientError>((status, body_bytes))
        };

        let (status, body_bytes) = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| ClientError::Timeout)??;
        decode(status, &body_bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, Body::empty())?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn delete_with_body<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::DELETE, path, body)?;
        self.execute(request).await
    }
}
