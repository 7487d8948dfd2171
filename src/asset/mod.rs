//! 资源模块：扫描结果与提取报告的数据模型
pub mod model;
pub mod report;

pub use self::model::{AssetCategory, AssetRecord, FetchOutcome};
pub use self::report::{
    AssetStats, DownloadEntry, DownloadOutcome, DownloadReport, ExtractReport, FetchedAsset,
};
