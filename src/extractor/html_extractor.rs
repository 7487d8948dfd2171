//! HTML标签提取器
//! 基于 html5ever 词法分析器，将文档展开为按出现顺序排列的元素列表
//! 畸形HTML按浏览器规则容错：未闭合标签、大小写混用、残缺属性均可处理

use std::cell::{Cell, RefCell};
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts
};
use markup5ever::interface::Attribute;
use tendril::StrTendril;

/// 单个元素（标签名与属性名均已小写）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    /// 仅 `<style>` / `<script>` 携带原始文本
    pub text: Option<String>,
}

impl HtmlElement {
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(key, _)| key == name)
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// 解析后的文档
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub elements: Vec<HtmlElement>,
}

impl ParsedDocument {
    /// 按标签名过滤，保持文档顺序
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a HtmlElement> + 'a {
        self.elements.iter().filter(move |el| el.is(name))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[derive(Debug, Default)]
struct DocumentSink {
    elements: RefCell<Vec<HtmlElement>>,
    // 正在收集文本的 style/script 元素下标
    open_text: Cell<Option<usize>>,
}

impl TokenSink for DocumentSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(Tag {
                kind: TagKind::StartTag,
                name,
                attrs,
                ..
            }) => {
                let tag_name: &str = &name;
                return self.open_element(tag_name, &attrs);
            }
            Token::TagToken(Tag {
                kind: TagKind::EndTag,
                name,
                ..
            }) => {
                let tag_name: &str = &name;
                self.close_element(tag_name);
            }
            Token::CharacterTokens(text) => self.push_text(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

impl DocumentSink {
    fn open_element(&self, name: &str, attrs: &[Attribute]) -> TokenSinkResult<()> {
        let captures_text = matches!(name, "style" | "script");
        let mut elements = self.elements.borrow_mut();
        elements.push(HtmlElement {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|attr| {
                    let key: &str = &attr.name.local;
                    (key.to_string(), attr.value.to_string())
                })
                .collect(),
            text: captures_text.then(String::new),
        });
        if captures_text {
            self.open_text.set(Some(elements.len() - 1));
        }

        // 与树构建器一致地切换原始文本状态，避免把脚本/样式内容误判为标签
        match name {
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
            "plaintext" => TokenSinkResult::Plaintext,
            _ => TokenSinkResult::Continue,
        }
    }

    fn close_element(&self, name: &str) {
        if let Some(index) = self.open_text.get() {
            if self.elements.borrow()[index].is(name) {
                self.open_text.set(None);
            }
        }
    }

    fn push_text(&self, text: &StrTendril) {
        if let Some(index) = self.open_text.get() {
            if let Some(buffer) = self.elements.borrow_mut()[index].text.as_mut() {
                buffer.push_str(text);
            }
        }
    }
}

/// 对外暴露的HTML提取器
#[derive(Debug, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    /// 从HTML字符串提取元素列表
    pub fn extract(html: &str) -> ParsedDocument {
        let tokenizer = Tokenizer::new(DocumentSink::default(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        ParsedDocument {
            elements: tokenizer.sink.elements.into_inner(),
        }
    }
}
