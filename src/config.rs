//! 全局配置管理,存储所有可配置项

use std::time::Duration;

/// 默认请求头中的浏览器标识
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 提取流程配置
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    // 单次请求超时（单位：秒）
    pub http_timeout: u64,
    // 是否拉取外链CSS/JS内容
    pub fetch_content: bool,
    // 最多拉取内容的外链脚本数（按发现顺序）
    pub max_js: usize,
    // 资源内容拉取并发上限
    pub concurrency: usize,
    // 内容截断上限（单位：字符）
    pub css_content_cap: usize,
    pub js_content_cap: usize,
    pub single_fetch_cap: usize,
    pub html_preview_cap: usize,
    // 请求相关
    pub user_agent: String,
    pub accept_invalid_certs: bool,
    pub max_redirects: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            http_timeout: 10,
            fetch_content: true,
            max_js: 10,
            concurrency: 8,
            css_content_cap: 50_000,
            js_content_cap: 100_000,
            single_fetch_cap: 200_000,
            html_preview_cap: 5_000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: true,
            max_redirects: 10,
        }
    }
}

impl ExtractConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> ExtractConfig {
        ExtractConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ExtractConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ExtractConfig::default(),
        }
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn fetch_content(mut self, fetch_content: bool) -> Self {
        self.config.fetch_content = fetch_content;
        self
    }

    pub fn max_js(mut self, max_js: usize) -> Self {
        self.config.max_js = max_js;
        self
    }

    /// 并发数至少为1
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.max(1);
        self
    }

    pub fn css_content_cap(mut self, cap: usize) -> Self {
        self.config.css_content_cap = cap;
        self
    }

    pub fn js_content_cap(mut self, cap: usize) -> Self {
        self.config.js_content_cap = cap;
        self
    }

    pub fn single_fetch_cap(mut self, cap: usize) -> Self {
        self.config.single_fetch_cap = cap;
        self
    }

    pub fn html_preview_cap(mut self, cap: usize) -> Self {
        self.config.html_preview_cap = cap;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.config.max_redirects = max_redirects;
        self
    }

    pub fn build(self) -> ExtractConfig {
        self.config
    }
}
