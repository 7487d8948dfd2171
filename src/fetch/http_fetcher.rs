//! 基于 reqwest 的默认拉取实现
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, redirect};
use tracing::debug;

use super::{FetchResponse, Fetcher};
use crate::config::ExtractConfig;
use crate::error::{AssetResult, AssetScanError};

/// HTTP 拉取器（内部 Client 可廉价克隆，连接池共享）
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ExtractConfig) -> AssetResult<Self> {
        let client = Client::builder()
            .default_headers(Self::browser_headers())
            .user_agent(config.user_agent.as_str())
            .redirect(redirect::Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }

    /// 浏览器风格的默认请求头（压缩协商由 reqwest 自动处理）
    fn browser_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> AssetResult<FetchResponse> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| AssetScanError::fetch(url, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| AssetScanError::fetch(url, e))?
            .to_vec();

        debug!("拉取完成：{} -> {}，状态码：{}，大小：{} 字节", url, final_url, status, body.len());
        Ok(FetchResponse {
            body,
            status,
            content_type,
            final_url,
        })
    }
}
