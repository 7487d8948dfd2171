//! 工具模块：URL解析、资源分类、版本提取、文本截断
pub mod asset_classifier;
pub mod text;
pub mod url_resolver;
pub mod version_extractor;

pub use self::asset_classifier::AssetClassifier;
pub use self::url_resolver::UrlResolver;
pub use self::version_extractor::VersionExtractor;
