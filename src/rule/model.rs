//! 签名规则与检测结果数据模型
//! 仅存储数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 签名命中但未捕获到版本号时的占位值
pub const VERSION_UNKNOWN: &str = "detected";

/// 技术签名规则（名称 + 展示图标 + 正则签名列表，签名之间为"或"关系）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LibraryRule {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(alias = "patterns")]
    pub signatures: Vec<String>,
}

impl LibraryRule {
    pub fn new(name: &str, icon: &str, signatures: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            signatures: signatures.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 检测置信度：命中2条及以上独立签名为 High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Medium,
    High,
}

impl Confidence {
    pub fn from_hits(hits: usize) -> Self {
        if hits >= 2 {
            Confidence::High
        } else {
            Confidence::Medium
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Medium => f.write_str("medium"),
            Confidence::High => f.write_str("high"),
        }
    }
}

/// 技术检测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryMatch {
    pub name: String,
    pub icon: String,
    pub version: String,
    pub confidence: Confidence,
}

impl LibraryMatch {
    pub fn has_version(&self) -> bool {
        self.version != VERSION_UNKNOWN
    }
}

// ======== 为 LibraryMatch 实现 Display trait（用于 CLI / Report 输出） ========
impl fmt::Display for LibraryMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_version() {
            write!(f, "{} {} ({})", self.name, self.version, self.confidence)
        } else {
            write!(f, "{} ({})", self.name, self.confidence)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_levels() {
        assert_eq!(Confidence::from_hits(1), Confidence::Medium);
        assert_eq!(Confidence::from_hits(2), Confidence::High);
        assert_eq!(Confidence::from_hits(5), Confidence::High);
        assert!(Confidence::High > Confidence::Medium);
    }

    #[test]
    fn test_match_display() {
        let jquery = LibraryMatch {
            name: "jQuery".into(),
            icon: "💲".into(),
            version: "3.6".into(),
            confidence: Confidence::High,
        };
        assert_eq!(jquery.to_string(), "jQuery 3.6 (high)");

        let vite = LibraryMatch {
            version: VERSION_UNKNOWN.into(),
            name: "Vite".into(),
            confidence: Confidence::Medium,
            ..jquery
        };
        assert_eq!(vite.to_string(), "Vite (medium)");
    }

    #[test]
    fn test_rule_accepts_patterns_alias() {
        let rule: LibraryRule =
            serde_json::from_str(r#"{"name":"Foo","patterns":["foo\\.js"]}"#).unwrap();
        assert_eq!(rule.signatures, vec!["foo\\.js".to_string()]);
        assert_eq!(rule.icon, "");
    }
}
