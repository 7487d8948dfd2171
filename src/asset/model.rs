//! 资源数据模型定义
//! 仅存储扫描结果，无任何业务逻辑，支持序列化/反序列化

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 资源语义分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Css,
    Js,
    Img,
    Font,
    Html,
    Json,
    Other,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Css => "css",
            AssetCategory::Js => "js",
            AssetCategory::Img => "img",
            AssetCategory::Font => "font",
            AssetCategory::Html => "html",
            AssetCategory::Json => "json",
            AssetCategory::Other => "other",
        }
    }

    /// preload 提示的 `as` 属性映射
    pub fn from_preload_as(as_value: Option<&str>) -> Self {
        match as_value {
            Some("script") => AssetCategory::Js,
            Some("style") => AssetCategory::Css,
            Some("image") => AssetCategory::Img,
            Some("font") => AssetCategory::Font,
            _ => AssetCategory::Other,
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 内容拉取结果（成功与失败互斥）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FetchOutcome {
    Fetched {
        fetched_size: u64,
        fetched_content: String,
    },
    Failed {
        fetch_error: String,
    },
}

/// 单条资源记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// 绝对URL，内联资源为 `inline-style-N` / `inline-script-N`
    pub location: String,
    pub category: AssetCategory,
    /// 产生该记录的扫描规则，仅用于溯源
    pub origin: String,
    pub is_inline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_content: Option<String>,
    /// 内联内容截断前的完整字符数
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_size: Option<usize>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default, flatten, skip_serializing_if = "Option::is_none")]
    pub fetched: Option<FetchOutcome>,
}

impl AssetRecord {
    /// 外链资源记录
    pub fn external(location: String, category: AssetCategory, origin: &str) -> Self {
        Self {
            location,
            category,
            origin: origin.to_string(),
            is_inline: false,
            inline_content: None,
            inline_size: None,
            attributes: BTreeMap::new(),
            fetched: None,
        }
    }

    /// 内联资源记录
    pub fn inline(
        location: String,
        category: AssetCategory,
        origin: &str,
        content: String,
        size: usize,
    ) -> Self {
        Self {
            location,
            category,
            origin: origin.to_string(),
            is_inline: true,
            inline_content: Some(content),
            inline_size: Some(size),
            attributes: BTreeMap::new(),
            fetched: None,
        }
    }

    pub fn with_attributes(mut self, attributes: BTreeMap<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn fetch_error(&self) -> Option<&str> {
        match &self.fetched {
            Some(FetchOutcome::Failed { fetch_error }) => Some(fetch_error),
            _ => None,
        }
    }
}

impl fmt::Display for AssetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.category, self.location, self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization_skips_empty_fields() {
        let record = AssetRecord::external(
            "https://x.test/a.css".to_string(),
            AssetCategory::Css,
            "link[rel=stylesheet]",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "css");
        assert_eq!(json["is_inline"], false);
        assert!(json.get("inline_content").is_none());
        assert!(json.get("attributes").is_none());
        assert!(json.get("fetch_error").is_none());
    }

    #[test]
    fn test_fetch_outcome_flattens_into_record() {
        let mut record = AssetRecord::external(
            "https://x.test/app.js".to_string(),
            AssetCategory::Js,
            "script[src]",
        );
        record.fetched = Some(FetchOutcome::Failed {
            fetch_error: "timeout".to_string(),
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fetch_error"], "timeout");
        assert!(json.get("fetched_content").is_none());
        assert_eq!(record.fetch_error(), Some("timeout"));
    }

    #[test]
    fn test_preload_mapping() {
        assert_eq!(AssetCategory::from_preload_as(Some("script")), AssetCategory::Js);
        assert_eq!(AssetCategory::from_preload_as(Some("fetch")), AssetCategory::Other);
        assert_eq!(AssetCategory::from_preload_as(None), AssetCategory::Other);
    }
}
