//! 提取流程输出结构

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use super::model::{AssetCategory, AssetRecord};
use crate::rule::LibraryMatch;

/// 按分类统计的资源数量
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetStats {
    pub total: usize,
    pub html: usize,
    pub css: usize,
    pub js: usize,
    pub img: usize,
    pub font: usize,
    pub json: usize,
    pub other: usize,
}

impl AssetStats {
    pub fn from_assets(assets: &[AssetRecord]) -> Self {
        let mut stats = Self {
            total: assets.len(),
            ..Self::default()
        };
        for asset in assets {
            let slot = match asset.category {
                AssetCategory::Html => &mut stats.html,
                AssetCategory::Css => &mut stats.css,
                AssetCategory::Js => &mut stats.js,
                AssetCategory::Img => &mut stats.img,
                AssetCategory::Font => &mut stats.font,
                AssetCategory::Json => &mut stats.json,
                AssetCategory::Other => &mut stats.other,
            };
            *slot += 1;
        }
        stats
    }
}

/// 单页提取结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractReport {
    pub url: String,
    pub final_url: String,
    pub status: u16,
    pub content_type: String,
    pub html_size: usize,
    pub html_preview: String,
    pub assets: Vec<AssetRecord>,
    pub libraries: Vec<LibraryMatch>,
    pub stats: AssetStats,
}

/// 单个资源的即时拉取结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedAsset {
    pub url: String,
    pub content: String,
    pub size: u64,
    pub status: u16,
    pub content_type: String,
}

/// 单个资源的保存结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DownloadOutcome {
    Saved { saved: PathBuf, size: u64 },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadEntry {
    pub url: String,
    #[serde(flatten)]
    pub outcome: DownloadOutcome,
}

/// 批量保存结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadReport {
    pub folder: String,
    pub results: Vec<DownloadEntry>,
    pub count: usize,
}

impl DownloadReport {
    pub fn saved_count(&self) -> usize {
        self.results
            .iter()
            .filter(|entry| matches!(entry.outcome, DownloadOutcome::Saved { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_count_every_category() {
        let assets = vec![
            AssetRecord::external("https://x.test/a.css".into(), AssetCategory::Css, "t"),
            AssetRecord::external("https://x.test/b.css".into(), AssetCategory::Css, "t"),
            AssetRecord::external("https://x.test/c.json".into(), AssetCategory::Json, "t"),
            AssetRecord::inline("inline-script-1".into(), AssetCategory::Js, "t", "x".into(), 1),
        ];
        let stats = AssetStats::from_assets(&assets);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.css, 2);
        assert_eq!(stats.json, 1);
        assert_eq!(stats.js, 1);
        assert_eq!(stats.img, 0);
    }

    #[test]
    fn test_download_entry_shape() {
        let entry = DownloadEntry {
            url: "https://x.test/a.png".into(),
            outcome: DownloadOutcome::Failed { error: "boom".into() },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["error"], "boom");
        assert!(json.get("saved").is_none());
    }
}
