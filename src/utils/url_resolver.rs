//! URL解析工具
//! 将相对引用拼接为绝对URL，拒绝不可拉取的引用（锚点/伪协议/data URI/邮件链接）

use url::Url;

/// 不携带可拉取资源的引用前缀
const SKIPPED_PREFIXES: [&str; 4] = ["data:", "javascript:", "#", "mailto:"];

/// 拼接后仍需拒绝的协议（拼接会剔除制表符/换行，`java\tscript:` 只能在此拦截）
const SKIPPED_SCHEMES: [&str; 3] = ["data", "javascript", "mailto"];

/// URL解析器
pub struct UrlResolver;

impl UrlResolver {
    /// 解析引用为绝对URL
    ///
    /// 空白引用、被排除的协议以及拼接失败都返回 `None`，调用方视为"未产生资源"
    pub fn resolve(reference: &str, base: &Url) -> Option<Url> {
        let reference = reference.trim();
        if reference.is_empty() || Self::is_skipped(reference) {
            return None;
        }
        base.join(reference)
            .ok()
            .filter(|resolved| !SKIPPED_SCHEMES.contains(&resolved.scheme()))
    }

    fn is_skipped(reference: &str) -> bool {
        SKIPPED_PREFIXES.iter().any(|prefix| {
            reference
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://x.test/dir/page.html").unwrap()
    }

    #[test]
    fn test_relative_and_absolute_references() {
        let base = base();
        assert_eq!(
            UrlResolver::resolve("/a.css", &base).unwrap().as_str(),
            "https://x.test/a.css"
        );
        assert_eq!(
            UrlResolver::resolve("img/b.png", &base).unwrap().as_str(),
            "https://x.test/dir/img/b.png"
        );
        assert_eq!(
            UrlResolver::resolve("../up.js?v=2", &base).unwrap().as_str(),
            "https://x.test/up.js?v=2"
        );
        assert_eq!(
            UrlResolver::resolve("//cdn.example.com/jquery.min.js", &base).unwrap().as_str(),
            "https://cdn.example.com/jquery.min.js"
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            UrlResolver::resolve("  /a.css\n", &base()).unwrap().as_str(),
            "https://x.test/a.css"
        );
        assert!(UrlResolver::resolve("   ", &base()).is_none());
        assert!(UrlResolver::resolve("", &base()).is_none());
    }

    #[test]
    fn test_non_fetchable_references_are_rejected() {
        let base = base();
        for reference in [
            "javascript:void(0)",
            "JavaScript:alert(1)",
            "data:image/png;base64,AAAA",
            "#top",
            "mailto:someone@x.test",
        ] {
            assert!(UrlResolver::resolve(reference, &base).is_none(), "{reference}");
        }
    }

    #[test]
    fn test_schemes_split_by_tab_or_newline_are_rejected() {
        let base = base();
        for reference in [
            "java\tscript:alert(1)",
            "java\nscript:void(0)",
            "da\nta:image/png;base64,AAAA",
            "mail\tto:someone@x.test",
        ] {
            assert!(UrlResolver::resolve(reference, &base).is_none(), "{reference:?}");
        }
    }
}
