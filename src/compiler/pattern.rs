//! 编译后签名模型
//! 签名正则编译后的结构

use regex::{Captures, Regex};

/// 编译后的单条签名（忽略大小写）
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub regex: Regex,
    /// 原始签名文本，用于日志
    pub source: String,
}

impl CompiledSignature {
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    pub fn captures<'a>(&self, input: &'a str) -> Option<Captures<'a>> {
        self.regex.captures(input)
    }
}

/// 技术编译后的规则
#[derive(Debug, Clone)]
pub struct CompiledLibraryRule {
    pub name: String,
    pub icon: String,
    /// 保持声明顺序，版本号取第一个有捕获的签名
    pub signatures: Vec<CompiledSignature>,
}

/// 编译后的签名库（保持声明顺序）
#[derive(Debug, Clone, Default)]
pub struct CompiledCatalog {
    pub rules: Vec<CompiledLibraryRule>,
}

impl CompiledCatalog {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 已编译签名总数
    pub fn signature_count(&self) -> usize {
        self.rules.iter().map(|r| r.signatures.len()).sum()
    }
}
