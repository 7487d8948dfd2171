//! 检测器核心：用编译后的签名库扫描页面语料，输出检测结果
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::compiler::{CompiledCatalog, CompiledLibraryRule, RuleCompiler};
use crate::error::AssetResult;
use crate::rule::{Confidence, LibraryMatch, LibraryRule, RuleLoader, VERSION_UNKNOWN};
use crate::utils::VersionExtractor;

/// 技术检测器（只读，可跨线程共享）
#[derive(Debug, Clone)]
pub struct LibraryDetector {
    catalog: Arc<CompiledCatalog>,
}

impl LibraryDetector {
    /// 由原始规则创建检测器
    pub fn from_rules(rules: &[LibraryRule]) -> Self {
        Self {
            catalog: Arc::new(RuleCompiler::compile(rules)),
        }
    }

    /// 使用内置签名库创建检测器
    pub fn builtin() -> Self {
        Self::from_rules(&RuleLoader::builtin())
    }

    /// 从自定义 JSON 签名库文件创建检测器
    pub async fn from_file(path: impl AsRef<Path>) -> AssetResult<Self> {
        let rules = RuleLoader::load_from_file(path).await?;
        Ok(Self::from_rules(&rules))
    }

    pub fn catalog(&self) -> &CompiledCatalog {
        &self.catalog
    }

    /// 核心检测接口：HTML 文本 + 已发现的资源 URL
    ///
    /// 语料为 `html + "\n" + urls.join("\n")`，结果按签名库声明顺序输出
    pub fn detect(&self, html: &str, urls: &[&str]) -> Vec<LibraryMatch> {
        let start = Instant::now();
        let corpus = Self::build_corpus(html, urls);

        let matches: Vec<LibraryMatch> = self
            .catalog
            .rules
            .iter()
            .filter_map(|rule| Self::match_rule(rule, &corpus))
            .collect();

        debug!(
            "技术检测完成：语料{}字节，命中{}项，耗时{:?}",
            corpus.len(),
            matches.len(),
            start.elapsed()
        );
        matches
    }

    fn build_corpus(html: &str, urls: &[&str]) -> String {
        let mut corpus = String::with_capacity(html.len() + urls.iter().map(|u| u.len() + 1).sum::<usize>() + 1);
        corpus.push_str(html);
        corpus.push('\n');
        corpus.push_str(&urls.join("\n"));
        corpus
    }

    /// 单个技术匹配：统计命中签名数，版本号取第一个非空捕获
    fn match_rule(rule: &CompiledLibraryRule, corpus: &str) -> Option<LibraryMatch> {
        let mut hits = 0usize;
        let mut version: Option<String> = None;

        for signature in &rule.signatures {
            if version.is_none() {
                // 仍需版本号时走捕获路径
                if let Some(captures) = signature.captures(corpus) {
                    hits += 1;
                    version = VersionExtractor::extract(&captures);
                }
            } else if signature.is_match(corpus) {
                hits += 1;
            }
        }

        if hits == 0 {
            return None;
        }

        Some(LibraryMatch {
            name: rule.name.clone(),
            icon: rule.icon.clone(),
            version: version.unwrap_or_else(|| VERSION_UNKNOWN.to_string()),
            confidence: Confidence::from_hits(hits),
        })
    }
}

impl Default for LibraryDetector {
    fn default() -> Self {
        Self::builtin()
    }
}
