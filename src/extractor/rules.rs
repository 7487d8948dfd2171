//! 资源扫描规则
//! 每条规则都是纯函数 `&ScanContext -> Vec<Candidate>`，互不依赖、全部执行
//! 规则的先后顺序决定同一URL最终保留哪条规则的来源标签，不可调整

use std::collections::BTreeMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::html_extractor::{HtmlElement, ParsedDocument};
use crate::asset::AssetCategory;
use crate::utils::text::{char_len, truncate_chars};

/// CSS `url(...)` 引用（引号可选）
pub static CSS_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"url\(["']?([^"')\s]+)["']?\)"#).unwrap()
});

static GOOGLE_FONTS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"fonts\.(googleapis|gstatic)\.com").unwrap()
});

/// 内联脚本去空白后的最小长度（不含），更短的视为噪声
pub const INLINE_SCRIPT_MIN_LEN: usize = 20;
/// 内联脚本内容截断上限（字符）
pub const INLINE_SCRIPT_CAP: usize = 10_000;

const LAZY_ATTRS: [(&str, &str); 4] = [
    ("data-src", "data-src (lazy)"),
    ("data-lazy", "data-lazy (lazy)"),
    ("data-original", "data-original (lazy)"),
    ("data-url", "data-url (lazy)"),
];

const FONT_LINK_MARKERS: [&str; 5] = ["font", ".woff", ".ttf", ".otf", ".eot"];

/// 扫描上下文：解析后的元素列表 + 原始HTML
pub struct ScanContext<'a> {
    pub doc: &'a ParsedDocument,
    pub html: &'a str,
}

/// 候选分类：固定分类，或按解析后URL的扩展名判断（字体/图片）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryHint {
    Fixed(AssetCategory),
    CssReference,
}

/// 规则产出的候选资源
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    Reference {
        reference: String,
        hint: CategoryHint,
        origin: &'static str,
        attributes: BTreeMap<String, Value>,
    },
    Inline {
        location: String,
        category: AssetCategory,
        origin: &'static str,
        content: String,
        size: usize,
    },
}

impl Candidate {
    fn fixed(reference: &str, category: AssetCategory, origin: &'static str) -> Self {
        Candidate::Reference {
            reference: reference.to_string(),
            hint: CategoryHint::Fixed(category),
            origin,
            attributes: BTreeMap::new(),
        }
    }

    fn css_reference(reference: &str, origin: &'static str) -> Self {
        Candidate::Reference {
            reference: reference.to_string(),
            hint: CategoryHint::CssReference,
            origin,
            attributes: BTreeMap::new(),
        }
    }

    fn with_attributes(mut self, attrs: BTreeMap<String, Value>) -> Self {
        if let Candidate::Reference { attributes, .. } = &mut self {
            *attributes = attrs;
        }
        self
    }
}

pub type ScanRule = fn(&ScanContext) -> Vec<Candidate>;

/// 规则执行顺序（顺序即去重时的优先级）
pub const SCAN_RULES: [(&str, ScanRule); 14] = [
    ("stylesheet_links", stylesheet_links),
    ("css_href_links", css_href_links),
    ("inline_styles", inline_styles),
    ("external_scripts", external_scripts),
    ("inline_scripts", inline_scripts),
    ("images", images),
    ("legacy_and_lazy_attrs", legacy_and_lazy_attrs),
    ("style_attr_urls", style_attr_urls),
    ("document_css_urls", document_css_urls),
    ("font_links", font_links),
    ("google_fonts_links", google_fonts_links),
    ("favicons", favicons),
    ("og_image", og_image),
    ("preload_hints", preload_hints),
];

/// 属性值包含子串（忽略大小写）
fn attr_contains(el: &HtmlElement, name: &str, needle: &str) -> bool {
    el.attr(name)
        .is_some_and(|value| value.to_ascii_lowercase().contains(needle))
}

/// 提取文本中的全部 `url(...)` 引用
pub fn css_urls(text: &str) -> impl Iterator<Item = &str> {
    CSS_URL_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

fn stylesheet_links(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements_named("link")
        .filter(|el| attr_contains(el, "rel", "stylesheet"))
        .filter_map(|el| el.attr("href"))
        .map(|href| Candidate::fixed(href, AssetCategory::Css, "link[rel=stylesheet]"))
        .collect()
}

/// 兜底：非标准 rel 的样式表
fn css_href_links(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements_named("link")
        .filter_map(|el| el.attr("href"))
        .filter(|href| href.contains(".css"))
        .map(|href| Candidate::fixed(href, AssetCategory::Css, "link[href*.css]"))
        .collect()
}

fn inline_styles(ctx: &ScanContext) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for (index, el) in ctx.doc.elements_named("style").enumerate() {
        let content = el.text();
        if content.trim().is_empty() {
            continue;
        }
        candidates.push(Candidate::Inline {
            location: format!("inline-style-{}", index + 1),
            category: AssetCategory::Css,
            origin: "<style> inline",
            content: content.to_string(),
            size: char_len(content),
        });
        candidates.extend(css_urls(content).map(|url| Candidate::css_reference(url, "css url()")));
    }
    candidates
}

fn external_scripts(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements_named("script")
        .filter_map(|el| el.attr("src").map(|src| (el, src)))
        .map(|(el, src)| {
            let attrs = BTreeMap::from([
                ("async".to_string(), Value::Bool(el.has_attr("async"))),
                ("defer".to_string(), Value::Bool(el.has_attr("defer"))),
                ("type".to_string(), Value::String(el.attr("type").unwrap_or_default().to_string())),
            ]);
            Candidate::fixed(src, AssetCategory::Js, "script[src]").with_attributes(attrs)
        })
        .collect()
}

fn inline_scripts(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements_named("script")
        .filter(|el| !el.has_attr("src"))
        .enumerate()
        .filter(|(_, el)| char_len(el.text().trim()) > INLINE_SCRIPT_MIN_LEN)
        .map(|(index, el)| {
            let content = el.text();
            Candidate::Inline {
                location: format!("inline-script-{}", index + 1),
                category: AssetCategory::Js,
                origin: "<script> inline",
                content: truncate_chars(content, INLINE_SCRIPT_CAP),
                size: char_len(content),
            }
        })
        .collect()
}

fn images(ctx: &ScanContext) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for el in ctx.doc.elements_named("img") {
        if let Some(src) = el.attr("src") {
            let attrs = BTreeMap::from([(
                "alt".to_string(),
                Value::String(el.attr("alt").unwrap_or_default().to_string()),
            )]);
            candidates.push(Candidate::fixed(src, AssetCategory::Img, "img[src]").with_attributes(attrs));
        }
        // srcset：逗号分隔，每项取第一个空白分隔的片段作为URL
        if let Some(srcset) = el.attr("srcset") {
            candidates.extend(
                srcset
                    .split(',')
                    .filter_map(|part| part.split_whitespace().next())
                    .map(|url| Candidate::fixed(url, AssetCategory::Img, "img[srcset]")),
            );
        }
    }
    candidates
}

/// 旧式 background 属性与懒加载属性
fn legacy_and_lazy_attrs(ctx: &ScanContext) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for el in &ctx.doc.elements {
        if let Some(bg) = el.attr("background").filter(|bg| !bg.is_empty()) {
            candidates.push(Candidate::fixed(bg, AssetCategory::Img, "background attr"));
        }
        for (attr, origin) in LAZY_ATTRS {
            // 不含点号的值多为占位符，不是URL
            if let Some(value) = el.attr(attr).filter(|v| v.contains('.')) {
                candidates.push(Candidate::fixed(value, AssetCategory::Img, origin));
            }
        }
    }
    candidates
}

fn style_attr_urls(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements
        .iter()
        .filter_map(|el| el.attr("style"))
        .flat_map(css_urls)
        .map(|url| Candidate::fixed(url, AssetCategory::Img, "style attr url()"))
        .collect()
}

/// 全文 `url(...)` 兜底扫描，覆盖结构化规则漏掉的引用（例如畸形标记）
fn document_css_urls(ctx: &ScanContext) -> Vec<Candidate> {
    css_urls(ctx.html)
        .map(|url| Candidate::css_reference(url, "html url()"))
        .collect()
}

fn font_links(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements_named("link")
        .filter_map(|el| el.attr("href"))
        .filter(|href| {
            let lower = href.to_ascii_lowercase();
            FONT_LINK_MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .map(|href| Candidate::fixed(href, AssetCategory::Font, "link[font]"))
        .collect()
}

fn google_fonts_links(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements_named("link")
        .filter_map(|el| el.attr("href"))
        .filter(|href| GOOGLE_FONTS_REGEX.is_match(href))
        .map(|href| Candidate::fixed(href, AssetCategory::Font, "Google Fonts"))
        .collect()
}

fn favicons(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements_named("link")
        .filter(|el| attr_contains(el, "rel", "icon") || attr_contains(el, "rel", "shortcut"))
        .filter_map(|el| el.attr("href"))
        .map(|href| Candidate::fixed(href, AssetCategory::Img, "favicon"))
        .collect()
}

/// 仅取首个 og:image
fn og_image(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements_named("meta")
        .find(|el| el.attr("property") == Some("og:image"))
        .and_then(|el| el.attr("content"))
        .map(|content| Candidate::fixed(content, AssetCategory::Img, "og:image"))
        .into_iter()
        .collect()
}

fn preload_hints(ctx: &ScanContext) -> Vec<Candidate> {
    ctx.doc
        .elements_named("link")
        .filter(|el| {
            el.attr("rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("preload"))
            })
        })
        .filter_map(|el| {
            el.attr("href").map(|href| {
                let category = AssetCategory::from_preload_as(el.attr("as"));
                Candidate::fixed(href, category, "link[preload]")
            })
        })
        .collect()
}
