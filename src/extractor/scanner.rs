//! 资源扫描器：按固定顺序执行扫描规则，统一经去重累加器输出资源记录

use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;
use url::Url;

use super::html_extractor::HtmlExtractor;
use super::rules::{Candidate, CategoryHint, SCAN_RULES, ScanContext};
use crate::asset::AssetRecord;
use crate::error::{AssetResult, AssetScanError};
use crate::utils::{AssetClassifier, UrlResolver};

/// 去重累加器：同一URL只保留第一条规则的结果
#[derive(Debug, Default)]
struct AssetCollector {
    records: Vec<AssetRecord>,
    seen: HashSet<String>,
}

impl AssetCollector {
    fn add(&mut self, candidate: Candidate, base: &Url) {
        match candidate {
            Candidate::Inline {
                location,
                category,
                origin,
                content,
                size,
            } => {
                self.records
                    .push(AssetRecord::inline(location, category, origin, content, size));
            }
            Candidate::Reference {
                reference,
                hint,
                origin,
                attributes,
            } => {
                let Some(resolved) = UrlResolver::resolve(&reference, base) else {
                    return;
                };
                let location = String::from(resolved);
                if !self.seen.insert(location.clone()) {
                    return;
                }
                let category = match hint {
                    CategoryHint::Fixed(category) => category,
                    CategoryHint::CssReference => AssetClassifier::classify_css_reference(&location),
                };
                self.records.push(
                    AssetRecord::external(location, category, origin).with_attributes(attributes),
                );
            }
        }
    }
}

/// 资源扫描器
pub struct AssetScanner;

impl AssetScanner {
    /// 扫描HTML文档，返回去重后的有序资源列表
    pub fn scan(html: &str, base: &Url) -> Vec<AssetRecord> {
        let start = Instant::now();
        let doc = HtmlExtractor::extract(html);
        let ctx = ScanContext { doc: &doc, html };

        let mut collector = AssetCollector::default();
        for (rule_name, rule) in SCAN_RULES {
            let candidates = rule(&ctx);
            let before = collector.records.len();
            let produced = candidates.len();
            for candidate in candidates {
                collector.add(candidate, base);
            }
            debug!(
                "扫描规则 {}：候选{}条，新增{}条",
                rule_name,
                produced,
                collector.records.len() - before
            );
        }

        debug!(
            "资源扫描完成，耗时{:?}，元素{}个，资源{}条",
            start.elapsed(),
            doc.len(),
            collector.records.len()
        );
        collector.records
    }

    /// 字符串基址入口：基址为空或非法时在扫描前直接拒绝
    pub fn scan_str(html: &str, base_url: &str) -> AssetResult<Vec<AssetRecord>> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(AssetScanError::InvalidInput("基址URL不能为空".to_string()));
        }
        let base = Url::parse(base_url)?;
        Ok(Self::scan(html, &base))
    }

    /// 外链资源URL列表（供技术栈检测使用）
    pub fn external_urls(assets: &[AssetRecord]) -> Vec<&str> {
        assets
            .iter()
            .filter(|asset| !asset.is_inline)
            .map(|asset| asset.location.as_str())
            .collect()
    }
}
