//! 签名库加载管理器
//! 负责加载内置签名库，或从本地 JSON 文件加载自定义签名库

use std::path::Path;
use tracing::debug;

use super::catalog::builtin_rules;
use super::model::LibraryRule;
use crate::error::{AssetResult, AssetScanError};

/// 签名库加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 内置签名库
    pub fn builtin() -> Vec<LibraryRule> {
        builtin_rules()
    }

    /// 从 JSON 字符串解析签名库（规则数组，保持声明顺序）
    pub fn from_json_str(content: &str) -> AssetResult<Vec<LibraryRule>> {
        let rules: Vec<LibraryRule> = serde_json::from_str(content)?;
        Self::validate(&rules)?;
        debug!("自定义签名库解析成功，规则数：{}", rules.len());
        Ok(rules)
    }

    /// 从本地 JSON 文件加载签名库
    pub async fn load_from_file(path: impl AsRef<Path>) -> AssetResult<Vec<LibraryRule>> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        debug!("读取签名库文件：{}，大小：{} 字节", path.display(), content.len());
        Self::from_json_str(&content)
    }

    fn validate(rules: &[LibraryRule]) -> AssetResult<()> {
        if rules.is_empty() {
            return Err(AssetScanError::CatalogLoad("签名库为空".to_string()));
        }
        if let Some(rule) = rules.iter().find(|r| r.name.trim().is_empty()) {
            return Err(AssetScanError::CatalogLoad(format!(
                "存在缺少名称的规则，签名：{:?}",
                rule.signatures
            )));
        }
        Ok(())
    }
}
