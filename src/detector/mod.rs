//! 检测模块：技术栈检测核心逻辑
pub mod detector;
pub mod global;

// 导出核心接口
pub use self::detector::LibraryDetector;
pub use self::global::{detect_libraries, global_detector};
