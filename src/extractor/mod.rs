//! 提取模块：HTML解析与资源扫描
pub mod html_extractor;
pub mod rules;
pub mod scanner;

pub use self::html_extractor::{HtmlElement, HtmlExtractor, ParsedDocument};
pub use self::rules::{Candidate, CategoryHint, SCAN_RULES, ScanContext, ScanRule};
pub use self::scanner::AssetScanner;
