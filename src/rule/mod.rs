//! 规则模块：技术签名库的数据模型、内置数据与加载
pub mod catalog;
pub mod loader;
pub mod model;

// 导出核心接口
pub use self::catalog::{BUILTIN_SIGNATURES, builtin_rules};
pub use self::loader::RuleLoader;
pub use self::model::{Confidence, LibraryMatch, LibraryRule, VERSION_UNKNOWN};
