//! rsassetscan - 网页静态资源提取与前端技术栈检测工具

// 导出全局错误类型
pub use self::error::{AssetResult, AssetScanError};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, ExtractConfig};

// 导出资源数据模型
pub use self::asset::{
    AssetCategory, AssetRecord, AssetStats, DownloadEntry, DownloadOutcome, DownloadReport,
    ExtractReport, FetchOutcome, FetchedAsset,
};

// 导出规则模块核心接口
pub use self::rule::{Confidence, LibraryMatch, LibraryRule, RuleLoader, VERSION_UNKNOWN};

// 导出提取模块核心接口
pub use self::extractor::{AssetScanner, HtmlExtractor};

// 导出工具模块核心接口
pub use self::utils::{AssetClassifier, UrlResolver, VersionExtractor};

// 导出编译模块核心接口
pub use self::compiler::{CompiledCatalog, RuleCompiler};

// 导出检测模块核心接口
pub use self::detector::{LibraryDetector, detect_libraries, global_detector};

// 导出拉取、存储与编排接口
pub use self::fetch::{FetchResponse, Fetcher, HttpFetcher};
pub use self::orchestrator::AssetExtractor;
pub use self::storage::{AssetStore, DirStore};

/// 扫描HTML文档中的全部资源引用
pub fn scan(html: &str, base_url: &str) -> AssetResult<Vec<AssetRecord>> {
    AssetScanner::scan_str(html, base_url)
}

/// 使用内置签名库检测技术栈
pub fn detect(html: &str, urls: &[&str]) -> Vec<LibraryMatch> {
    detect_libraries(html, urls)
}

// 声明所有子模块
pub mod asset;
pub mod compiler;
pub mod config;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod orchestrator;
pub mod rule;
pub mod storage;
pub mod utils;
