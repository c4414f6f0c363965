//! REST API 客户端
//!
//! 封装对 card-service 的 HTTP 调用。

use anyhow::Result;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// 原始 API 响应
///
/// 拒绝也是合法结果，所以不把非 2xx 状态当成错误
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
    pub request_id: Option<String>,
}

impl ApiResponse {
    /// `error` 字段文本
    pub fn error(&self) -> Option<&str> {
        self.body["error"].as_str()
    }
}

/// API 客户端
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("创建 HTTP 客户端失败");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // ========== 客户 API ==========

    /// 登记客户
    pub async fn register_client<R: Serialize>(&self, req: &R) -> Result<ApiResponse> {
        self.post("/client", req).await
    }

    /// 列出客户
    pub async fn list_clients(&self) -> Result<ApiResponse> {
        self.get("/clients").await
    }

    // ========== 消费 API ==========

    /// 评估消费
    pub async fn evaluate_purchase<R: Serialize>(&self, req: &R) -> Result<ApiResponse> {
        self.post("/purchase", req).await
    }

    // ========== 运维 API ==========

    pub async fn health(&self) -> Result<String> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.error_for_status()?.text().await?)
    }

    pub async fn ready(&self) -> Result<ApiResponse> {
        self.get("/ready").await
    }

    /// 发送原始请求体（用于非法 JSON 测试）
    pub async fn post_raw(&self, path: &str, body: &str) -> Result<ApiResponse> {
        let resp = self
            .client
            .post(self.url(path))
            .header("content-type", "application/json")
            .header("x-request-id", "e2e-raw")
            .body(body.to_string())
            .send()
            .await?;
        self.handle_response(resp).await
    }

    // ========== 内部方法 ==========

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<ApiResponse> {
        let resp = self.client.get(self.url(path)).send().await?;
        self.handle_response(resp).await
    }

    async fn post<R: Serialize>(&self, path: &str, body: &R) -> Result<ApiResponse> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response(&self, resp: Response) -> Result<ApiResponse> {
        let status = resp.status().as_u16();
        let request_id = resp
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let text = resp.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

        Ok(ApiResponse {
            status,
            body,
            request_id,
        })
    }
}
