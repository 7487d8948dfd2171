//! 版本提取工具模块
//! 负责从签名正则的捕获结果中提取版本号
//! 规则：取第一个捕获分组，清理前后空白，空值视为未捕获

use regex::Captures;

/// 版本提取工具类
pub struct VersionExtractor;

impl VersionExtractor {
    /// 从正则捕获结果中提取版本号
    ///
    /// # 返回值
    /// - `Some(String)`: 第一个捕获分组的非空内容
    /// - `None`: 签名没有捕获分组，或分组未参与匹配/为空
    pub fn extract(captures: &Captures) -> Option<String> {
        captures
            .get(1)
            .map(|matched| matched.as_str().trim())
            .filter(|version| !version.is_empty())
            .map(str::to_string)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_extract_first_group() {
        let regex = Regex::new(r"jquery[.\-](\d+\.\d+)").unwrap();
        let captures = regex.captures("/js/jquery-3.6.min.js").unwrap();
        assert_eq!(VersionExtractor::extract(&captures), Some("3.6".to_string()));
    }

    #[test]
    fn test_pattern_without_group() {
        let regex = Regex::new(r"jquery\.min\.js").unwrap();
        let captures = regex.captures("/js/jquery.min.js").unwrap();
        assert_eq!(VersionExtractor::extract(&captures), None);
    }

    #[test]
    fn test_optional_group_not_participating() {
        let regex = Regex::new(r"three[@/]r?(\d+)?").unwrap();
        let captures = regex.captures("three/").unwrap();
        assert_eq!(VersionExtractor::extract(&captures), None);
    }

    #[test]
    fn test_group_whitespace_is_trimmed() {
        let regex = Regex::new(r"ver:(\s*[\d.]+\s*)").unwrap();
        let captures = regex.captures("ver: 1.2 ").unwrap();
        assert_eq!(VersionExtractor::extract(&captures), Some("1.2".to_string()));
    }
}
