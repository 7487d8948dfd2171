//! 拉取模块：HTTP 资源获取抽象
pub mod http_fetcher;

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AssetResult;

pub use self::http_fetcher::HttpFetcher;

/// 一次拉取的响应（非2xx状态码同样视为成功响应）
#[derive(Debug, Clone, Default)]
pub struct FetchResponse {
    pub body: Vec<u8>,
    pub status: u16,
    pub content_type: String,
    /// 跟随重定向之后的最终地址
    pub final_url: String,
}

impl FetchResponse {
    /// 按 UTF-8 宽松解码响应体
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// 原始响应体字节数
    pub fn byte_size(&self) -> u64 {
        self.body.len() as u64
    }
}

/// 资源拉取接口
///
/// 传输层失败（DNS/TLS/超时）返回 `FetchFailure`
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> AssetResult<FetchResponse>;
}
