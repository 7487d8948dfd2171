//! 编排模块：拉取页面、扫描资源、检测技术栈、并发拉取资源内容与批量下载
pub mod download;
pub mod extractor;

pub use self::extractor::AssetExtractor;

#[cfg(test)]
pub(crate) mod stub {
    //! 测试用内存拉取器
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::error::{AssetResult, AssetScanError};
    use crate::fetch::{FetchResponse, Fetcher};

    /// 测试日志（RUST_LOG 控制级别，重复初始化忽略）
    pub fn init_test_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[derive(Default)]
    pub struct StubFetcher {
        pages: HashMap<String, FetchResponse>,
        pub calls: Mutex<Vec<String>>,
        delay: Option<Duration>,
        in_flight: AtomicUsize,
        pub peak_in_flight: AtomicUsize,
    }

    impl StubFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_page(mut self, url: &str, content_type: &str, body: &str) -> Self {
            self.pages.insert(
                url.to_string(),
                FetchResponse {
                    body: body.as_bytes().to_vec(),
                    status: 200,
                    content_type: content_type.to_string(),
                    final_url: url.to_string(),
                },
            );
            self
        }

        pub fn with_redirect(mut self, from: &str, to: &str, body: &str) -> Self {
            self.pages.insert(
                from.to_string(),
                FetchResponse {
                    body: body.as_bytes().to_vec(),
                    status: 200,
                    content_type: "text/html".to_string(),
                    final_url: to.to_string(),
                },
            );
            self
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn called(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &str, _timeout: Duration) -> AssetResult<FetchResponse> {
            self.calls.lock().unwrap().push(url.to_string());
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| AssetScanError::fetch(url, "connection refused"))
        }
    }
}
