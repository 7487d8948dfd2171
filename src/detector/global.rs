//! 全局检测器单例管理
//! 内置签名库只编译一次，之后所有检测复用同一只读实例
use once_cell::sync::Lazy;

use super::detector::LibraryDetector;
use crate::rule::LibraryMatch;

/// 全局检测器实例（内置签名库）
static GLOBAL_DETECTOR: Lazy<LibraryDetector> = Lazy::new(LibraryDetector::builtin);

/// 获取全局检测器
pub fn global_detector() -> &'static LibraryDetector {
    &GLOBAL_DETECTOR
}

/// 使用内置签名库检测技术栈
pub fn detect_libraries(html: &str, urls: &[&str]) -> Vec<LibraryMatch> {
    GLOBAL_DETECTOR.detect(html, urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_detector_is_shared() {
        let first = global_detector() as *const LibraryDetector;
        let second = global_detector() as *const LibraryDetector;
        assert_eq!(first, second);
        assert_eq!(global_detector().catalog().len(), 56);
    }

    #[test]
    fn test_detect_libraries() {
        let matches = detect_libraries(r#"<script src="/wp-includes/js/wp-embed.js"></script>"#, &[]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "WordPress");
    }
}
