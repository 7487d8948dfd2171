//! 签名编译器核心
//! 仅负责将原始签名规则编译为可执行的正则，无效签名跳过并告警

use std::time::Instant;
use regex::RegexBuilder;
use tracing::{debug, warn};

use super::pattern::{CompiledCatalog, CompiledLibraryRule, CompiledSignature};
use crate::error::AssetResult;
use crate::rule::LibraryRule;

/// 签名编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译签名库（输出顺序与输入一致）
    pub fn compile(rules: &[LibraryRule]) -> CompiledCatalog {
        let start = Instant::now();
        let mut stats = CompileStats::default();

        let rules = rules
            .iter()
            .map(|rule| Self::compile_rule(rule, &mut stats))
            .collect();

        debug!("✅ 签名库编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "📊 编译统计：规则{}条、签名{}条、跳过无效签名{}条",
            stats.rule_count, stats.signature_count, stats.skipped_count
        );

        CompiledCatalog { rules }
    }

    /// 编译单个技术规则
    fn compile_rule(rule: &LibraryRule, stats: &mut CompileStats) -> CompiledLibraryRule {
        stats.rule_count += 1;
        let mut signatures = Vec::with_capacity(rule.signatures.len());

        for source in &rule.signatures {
            match Self::compile_signature(source) {
                Ok(signature) => {
                    stats.signature_count += 1;
                    signatures.push(signature);
                }
                Err(e) => {
                    stats.skipped_count += 1;
                    warn!("签名编译失败，已跳过：{} -> {}，错误：{}", rule.name, source, e);
                }
            }
        }

        CompiledLibraryRule {
            name: rule.name.clone(),
            icon: rule.icon.clone(),
            signatures,
        }
    }

    /// 编译单条签名（忽略大小写）
    pub fn compile_signature(source: &str) -> AssetResult<CompiledSignature> {
        let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
        Ok(CompiledSignature {
            regex,
            source: source.to_string(),
        })
    }
}

/// 编译统计
#[derive(Debug, Default)]
struct CompileStats {
    rule_count: usize,
    signature_count: usize,
    skipped_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetScanError;
    use crate::rule::builtin_rules;

    #[test]
    fn test_compile_builtin_catalog() {
        let rules = builtin_rules();
        let catalog = RuleCompiler::compile(&rules);
        assert_eq!(catalog.len(), rules.len());
        let declared: usize = rules.iter().map(|r| r.signatures.len()).sum();
        assert_eq!(catalog.signature_count(), declared);
    }

    #[test]
    fn test_signature_is_case_insensitive() {
        let signature = RuleCompiler::compile_signature(r"jQuery\.fn").unwrap();
        assert!(signature.is_match("JQUERY.FN.extend"));
        assert!(signature.is_match("jquery.fn"));
    }

    #[test]
    fn test_invalid_signature_skipped() {
        let rules = vec![LibraryRule::new("Broken", "", &[r"broken(", r"broken\.js"])];
        let catalog = RuleCompiler::compile(&rules);
        assert_eq!(catalog.rules[0].signatures.len(), 1);
        assert_eq!(catalog.rules[0].signatures[0].source, r"broken\.js");

        assert!(matches!(
            RuleCompiler::compile_signature("("),
            Err(AssetScanError::RegexCompile(_))
        ));
    }
}
