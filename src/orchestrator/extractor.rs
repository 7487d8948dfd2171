//! 提取流程核心：页面拉取 -> 资源扫描 -> 技术检测 -> 资源内容并发拉取
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};
use url::Url;

use crate::asset::{AssetCategory, AssetRecord, AssetStats, ExtractReport, FetchOutcome, FetchedAsset};
use crate::config::ExtractConfig;
use crate::detector::{LibraryDetector, global_detector};
use crate::error::{AssetResult, AssetScanError};
use crate::extractor::AssetScanner;
use crate::fetch::{FetchResponse, Fetcher, HttpFetcher};
use crate::utils::text::{char_len, truncate_chars};

/// 资源提取器
#[derive(Clone)]
pub struct AssetExtractor {
    pub(crate) config: ExtractConfig,
    pub(crate) fetcher: Arc<dyn Fetcher>,
    detector: LibraryDetector,
}

impl AssetExtractor {
    /// 使用默认 HTTP 拉取器创建
    pub fn new(config: ExtractConfig) -> AssetResult<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// 使用自定义拉取器创建
    pub fn with_fetcher(config: ExtractConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            config,
            fetcher,
            detector: global_detector().clone(),
        }
    }

    /// 替换技术检测器（例如自定义签名库）
    pub fn with_detector(mut self, detector: LibraryDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// 提取单个页面的全部资源
    ///
    /// 页面本身拉取失败时返回 `FetchFailure`；单个资源的失败记录在对应资源上
    pub async fn extract(&self, url: &str) -> AssetResult<ExtractReport> {
        let start = Instant::now();
        let url = Self::normalize_page_url(url)?;

        let page = self.fetcher.fetch(&url, self.config.timeout()).await?;
        let html = page.text().into_owned();
        let final_url = if page.final_url.is_empty() {
            url.clone()
        } else {
            page.final_url.clone()
        };
        let base = Url::parse(&final_url)?;

        let mut assets = AssetScanner::scan(&html, &base);
        let libraries = {
            let urls = AssetScanner::external_urls(&assets);
            self.detector.detect(&html, &urls)
        };

        if self.config.fetch_content {
            self.fetch_asset_contents(&mut assets).await;
        }

        let stats = AssetStats::from_assets(&assets);
        debug!(
            "页面提取完成：{}，资源{}条，技术{}项，耗时{:?}",
            final_url,
            stats.total,
            libraries.len(),
            start.elapsed()
        );

        Ok(ExtractReport {
            url,
            final_url,
            status: page.status,
            content_type: page.content_type,
            html_size: char_len(&html),
            html_preview: truncate_chars(&html, self.config.html_preview_cap),
            assets,
            libraries,
            stats,
        })
    }

    /// 即时拉取单个资源内容
    pub async fn fetch_single(&self, url: &str) -> AssetResult<FetchedAsset> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AssetScanError::InvalidInput("URL不能为空".to_string()));
        }
        let response = self.fetcher.fetch(url, self.config.timeout()).await?;
        Ok(FetchedAsset {
            url: url.to_string(),
            content: truncate_chars(&response.text(), self.config.single_fetch_cap),
            size: response.byte_size(),
            status: response.status,
            content_type: response.content_type,
        })
    }

    /// 页面地址规范化：去除空白，缺少协议时补全 `https://`
    fn normalize_page_url(url: &str) -> AssetResult<String> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AssetScanError::InvalidInput("URL不能为空".to_string()));
        }
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(url.to_string())
        } else {
            Ok(format!("https://{}", url))
        }
    }

    /// 需要拉取内容的资源：全部外链CSS + 前 max_js 个外链脚本（按发现顺序）
    fn content_targets(&self, assets: &[AssetRecord]) -> Vec<(usize, usize)> {
        let mut js_taken = 0usize;
        let mut targets = Vec::new();
        for (index, asset) in assets.iter().enumerate() {
            if asset.is_inline {
                continue;
            }
            match asset.category {
                AssetCategory::Css => targets.push((index, self.config.css_content_cap)),
                AssetCategory::Js if js_taken < self.config.max_js => {
                    js_taken += 1;
                    targets.push((index, self.config.js_content_cap));
                }
                _ => {}
            }
        }
        targets
    }

    async fn fetch_asset_contents(&self, assets: &mut [AssetRecord]) {
        let targets = self.content_targets(assets);
        if targets.is_empty() {
            return;
        }
        let urls = targets
            .iter()
            .map(|(index, _)| assets[*index].location.clone())
            .collect();
        let responses = self.fetch_concurrently(urls).await;

        let mut failed = 0usize;
        for ((index, cap), response) in targets.into_iter().zip(responses) {
            let outcome = match response {
                Ok(response) => FetchOutcome::Fetched {
                    fetched_size: response.byte_size(),
                    fetched_content: truncate_chars(&response.text(), cap),
                },
                Err(e) => {
                    failed += 1;
                    FetchOutcome::Failed {
                        fetch_error: e.to_string(),
                    }
                }
            };
            assets[index].fetched = Some(outcome);
        }
        debug!("资源内容拉取完成，失败{}条", failed);
    }

    /// 并发拉取一组 URL，结果顺序与输入一致；单个失败不影响其他任务
    pub(crate) async fn fetch_concurrently(
        &self,
        urls: Vec<String>,
    ) -> Vec<AssetResult<FetchResponse>> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let timeout = self.config.timeout();
        let mut tasks = JoinSet::new();

        for (index, url) in urls.iter().cloned().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let result: AssetResult<FetchResponse> = async {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|e| AssetScanError::fetch(&url, e))?;
                    fetcher.fetch(&url, timeout).await
                }
                .await;
                if let Err(e) = &result {
                    warn!("资源拉取失败：{}", e);
                }
                (index, result)
            });
        }

        let mut slots: Vec<Option<AssetResult<FetchResponse>>> = urls.iter().map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(e) => warn!("拉取任务异常终止：{}", e),
            }
        }

        slots
            .into_iter()
            .zip(urls)
            .map(|(slot, url)| {
                slot.unwrap_or_else(|| Err(AssetScanError::fetch(url, "拉取任务异常终止")))
            })
            .collect()
    }
}
