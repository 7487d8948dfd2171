//! 全局错误类型定义
//! 引用无法解析（data:/javascript:/锚点等）不属于错误，解析器直接返回 None

use thiserror::Error;
use regex::Error as RegexError;
use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum AssetScanError {
    // 调用参数错误（开始任何工作之前拒绝）
    #[error("无效输入：{0}")]
    InvalidInput(String),

    // 网络相关错误（DNS/TLS/超时等传输层失败，非2xx状态码不算失败）
    #[error("资源拉取失败：{url}，原因：{reason}")]
    FetchFailure { url: String, reason: String },
    // HTTP客户端初始化失败（TLS后端/配置错误），与单次请求无关
    #[error("HTTP客户端构建失败：{0}")]
    HttpClient(#[from] ReqwestError),

    // 存储相关错误
    #[error("资源保存失败：{name}，原因：{reason}")]
    PersistFailure { name: String, reason: String },

    // 签名库相关错误
    #[error("签名库加载失败：{0}")]
    CatalogLoad(String),
    #[error("正则编译失败：{0}")]
    RegexCompile(#[from] RegexError),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    Json(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    Io(#[from] IoError),
    #[error("URL解析失败：{0}")]
    Url(#[from] UrlParseError),
}

impl AssetScanError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::FetchFailure {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn persist(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::PersistFailure {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

// 全局Result类型
pub type AssetResult<T> = Result<T, AssetScanError>;
