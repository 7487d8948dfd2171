//! 存储模块：下载资源的落盘抽象
pub mod dir_store;

use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use crate::error::AssetResult;

pub use self::dir_store::DirStore;

/// 资源保存接口
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// 保存字节内容，返回实际写入路径
    async fn persist(&self, suggested_name: &str, bytes: &[u8]) -> AssetResult<PathBuf>;

    /// 存储位置描述（用于报告）
    fn location(&self) -> String;
}

/// 资源 URL 路径的最后一段，作为建议文件名（可能为空，由存储实现兜底）
pub fn suggested_file_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.path().rsplit('/').next().map(str::to_string))
        .unwrap_or_default()
}
