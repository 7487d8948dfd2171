//! 资源类型分类器
//! 按固定顺序判断（先匹配先返回），顺序即同时命中多条规则时的裁决策略

use crate::asset::AssetCategory;

const JS_EXTENSIONS: [&str; 3] = ["js", "mjs", "cjs"];
const IMAGE_EXTENSIONS: [&str; 9] = ["png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "avif", "bmp"];
const FONT_EXTENSIONS: [&str; 5] = ["woff", "woff2", "ttf", "otf", "eot"];
const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// 资源分类器
pub struct AssetClassifier;

impl AssetClassifier {
    /// 根据URL与声明的Content-Type分类
    pub fn classify(url: &str, content_type: Option<&str>) -> AssetCategory {
        let path = Self::normalized_path(url);
        let ct = content_type.unwrap_or_default().to_ascii_lowercase();

        if ct.contains("javascript") || has_extension(&path, &JS_EXTENSIONS) {
            AssetCategory::Js
        } else if ct.contains("css") || has_extension(&path, &["css"]) {
            AssetCategory::Css
        } else if has_extension(&path, &IMAGE_EXTENSIONS) || ct.contains("image") {
            AssetCategory::Img
        } else if has_extension(&path, &FONT_EXTENSIONS) || ct.contains("font") {
            AssetCategory::Font
        } else if has_extension(&path, &HTML_EXTENSIONS) || ct.contains("html") {
            AssetCategory::Html
        } else if has_extension(&path, &["json"]) {
            AssetCategory::Json
        } else {
            AssetCategory::Other
        }
    }

    /// CSS `url(...)` 引用的分类：字体扩展名归为字体，其余视为图片
    pub fn classify_css_reference(url: &str) -> AssetCategory {
        if Self::is_font_url(url) {
            AssetCategory::Font
        } else {
            AssetCategory::Img
        }
    }

    pub fn is_font_url(url: &str) -> bool {
        has_extension(&Self::normalized_path(url), &FONT_EXTENSIONS)
    }

    /// 小写化并去掉查询串与片段
    fn normalized_path(url: &str) -> String {
        let end = url.find(['?', '#']).unwrap_or(url.len());
        url[..end].to_ascii_lowercase()
    }
}

fn has_extension(path: &str, extensions: &[&str]) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| extensions.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_classification() {
        let cases = [
            ("https://x.test/app.js", AssetCategory::Js),
            ("https://x.test/app.MJS", AssetCategory::Js),
            ("https://x.test/site.css?v=3", AssetCategory::Css),
            ("https://x.test/logo.SVG", AssetCategory::Img),
            ("https://x.test/hero.avif#frag", AssetCategory::Img),
            ("https://x.test/f.woff2", AssetCategory::Font),
            ("https://x.test/about.htm", AssetCategory::Html),
            ("https://x.test/data.json", AssetCategory::Json),
            ("https://x.test/download", AssetCategory::Other),
            ("https://x.test/archive.js.map", AssetCategory::Other),
        ];
        for (url, expected) in cases {
            assert_eq!(AssetClassifier::classify(url, None), expected, "{url}");
        }
    }

    #[test]
    fn test_content_type_classification() {
        assert_eq!(
            AssetClassifier::classify("https://x.test/x", Some("application/javascript")),
            AssetCategory::Js
        );
        assert_eq!(
            AssetClassifier::classify("https://x.test/x", Some("text/css; charset=utf-8")),
            AssetCategory::Css
        );
        assert_eq!(
            AssetClassifier::classify("https://x.test/x", Some("image/png")),
            AssetCategory::Img
        );
        assert_eq!(
            AssetClassifier::classify("https://x.test/x", Some("font/woff2")),
            AssetCategory::Font
        );
        assert_eq!(
            AssetClassifier::classify("https://x.test/x", Some("text/html")),
            AssetCategory::Html
        );
        // json 只看扩展名
        assert_eq!(
            AssetClassifier::classify("https://x.test/x", Some("application/json")),
            AssetCategory::Other
        );
    }

    #[test]
    fn test_rule_order_breaks_ties() {
        // 声明为 javascript 的 .css 文件：JS 规则优先
        assert_eq!(
            AssetClassifier::classify("https://x.test/a.css", Some("text/javascript")),
            AssetCategory::Js
        );
        // 声明为 css 的 .png：CSS 规则先于图片扩展名
        assert_eq!(
            AssetClassifier::classify("https://x.test/a.png", Some("text/css")),
            AssetCategory::Css
        );
        // 图片扩展名先于 font 类型声明
        assert_eq!(
            AssetClassifier::classify("https://x.test/a.png", Some("font/ttf")),
            AssetCategory::Img
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let first = AssetClassifier::classify("https://x.test/a.woff?x=1", Some("text/plain"));
        for _ in 0..10 {
            assert_eq!(
                AssetClassifier::classify("https://x.test/a.woff?x=1", Some("text/plain")),
                first
            );
        }
    }

    #[test]
    fn test_css_reference_classification() {
        assert_eq!(
            AssetClassifier::classify_css_reference("https://x.test/f.TTF?v=1"),
            AssetCategory::Font
        );
        assert_eq!(
            AssetClassifier::classify_css_reference("https://x.test/bg.png"),
            AssetCategory::Img
        );
        assert_eq!(
            AssetClassifier::classify_css_reference("https://x.test/unknown"),
            AssetCategory::Img
        );
    }
}
