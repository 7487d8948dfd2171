//! 批量下载：并发拉取外链资源，按发现顺序逐个落盘
use tracing::{debug, warn};

use super::extractor::AssetExtractor;
use crate::asset::{AssetRecord, DownloadEntry, DownloadOutcome, DownloadReport};
use crate::storage::{AssetStore, suggested_file_name};

impl AssetExtractor {
    /// 下载资源到存储；内联资源与非 http(s) 地址直接跳过
    pub async fn download_assets(&self, assets: &[AssetRecord], store: &dyn AssetStore) -> DownloadReport {
        let urls: Vec<String> = assets
            .iter()
            .filter(|asset| !asset.is_inline && asset.location.starts_with("http"))
            .map(|asset| asset.location.clone())
            .collect();
        debug!("开始下载资源{}条 -> {}", urls.len(), store.location());

        let responses = self.fetch_concurrently(urls.clone()).await;

        let mut results = Vec::with_capacity(urls.len());
        for (url, response) in urls.into_iter().zip(responses) {
            let outcome = match response {
                Ok(response) => match store.persist(&suggested_file_name(&url), &response.body).await {
                    Ok(saved) => DownloadOutcome::Saved {
                        saved,
                        size: response.byte_size(),
                    },
                    Err(e) => {
                        warn!("资源保存失败：{}", e);
                        DownloadOutcome::Failed { error: e.to_string() }
                    }
                },
                Err(e) => DownloadOutcome::Failed { error: e.to_string() },
            };
            results.push(DownloadEntry { url, outcome });
        }

        let report = DownloadReport {
            folder: store.location(),
            count: results.len(),
            results,
        };
        debug!("下载完成：成功{}条，共{}条", report.saved_count(), report.count);
        report
    }
}
