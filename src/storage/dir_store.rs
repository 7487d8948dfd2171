//! 本地目录存储实现
use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::Mutex;
use tracing::debug;

use super::AssetStore;
use crate::error::{AssetResult, AssetScanError};

/// 文件名中允许保留的字符之外一律替换为 `_`
static UNSAFE_CHARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\-_.]").unwrap()
});

const FALLBACK_FILE_NAME: &str = "index.html";

/// 将资源保存到本地目录
///
/// 同一实例内重复的文件名追加 `-N` 后缀，不会静默覆盖
#[derive(Debug)]
pub struct DirStore {
    folder: PathBuf,
    used_names: Mutex<HashSet<String>>,
}

impl DirStore {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            used_names: Mutex::new(HashSet::new()),
        }
    }

    /// 以当前时间戳命名的默认目录 `assets_<unix秒>`
    pub fn timestamped() -> Self {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self::new(format!("assets_{}", secs))
    }

    /// 文件名清理：非法字符替换为 `_`，空名回退为 `index.html`
    pub fn sanitize_file_name(name: &str) -> String {
        if name.is_empty() {
            return FALLBACK_FILE_NAME.to_string();
        }
        UNSAFE_CHARS_REGEX.replace_all(name, "_").into_owned()
    }

    /// 在已用名称集合中分配一个不冲突的文件名
    fn claim_name(used: &mut HashSet<String>, name: &str) -> String {
        if used.insert(name.to_string()) {
            return name.to_string();
        }
        let (stem, ext) = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
            _ => (name, None),
        };
        let mut n = 1usize;
        loop {
            let candidate = match ext {
                Some(ext) => format!("{}-{}.{}", stem, n, ext),
                None => format!("{}-{}", stem, n),
            };
            if used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[async_trait]
impl AssetStore for DirStore {
    async fn persist(&self, suggested_name: &str, bytes: &[u8]) -> AssetResult<PathBuf> {
        let sanitized = Self::sanitize_file_name(suggested_name);
        let file_name = {
            let mut used = self.used_names.lock().await;
            Self::claim_name(&mut used, &sanitized)
        };

        tokio::fs::create_dir_all(&self.folder)
            .await
            .map_err(|e| AssetScanError::persist(&file_name, e))?;

        let path = self.folder.join(&file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AssetScanError::persist(&file_name, e))?;

        debug!("资源已保存：{}，大小：{} 字节", path.display(), bytes.len());
        Ok(path)
    }

    fn location(&self) -> String {
        self.folder.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::suggested_file_name;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(DirStore::sanitize_file_name("app.min.js"), "app.min.js");
        assert_eq!(DirStore::sanitize_file_name("my file(1).css"), "my_file_1_.css");
        assert_eq!(DirStore::sanitize_file_name(""), "index.html");
    }

    #[test]
    fn test_file_name_from_url() {
        let name = |url: &str| DirStore::sanitize_file_name(&suggested_file_name(url));
        assert_eq!(name("https://x.test/js/app.js?v=3"), "app.js");
        assert_eq!(name("https://x.test/"), "index.html");
        assert_eq!(name("https://x.test"), "index.html");
        assert_eq!(name("https://x.test/a%20b.png"), "a_20b.png");
    }

    #[test]
    fn test_claim_name_suffixes() {
        let mut used = HashSet::new();
        assert_eq!(DirStore::claim_name(&mut used, "a.css"), "a.css");
        assert_eq!(DirStore::claim_name(&mut used, "a.css"), "a-1.css");
        assert_eq!(DirStore::claim_name(&mut used, "a.css"), "a-2.css");
        assert_eq!(DirStore::claim_name(&mut used, "LICENSE"), "LICENSE");
        assert_eq!(DirStore::claim_name(&mut used, "LICENSE"), "LICENSE-1");
        assert_eq!(DirStore::claim_name(&mut used, ".env"), ".env");
        assert_eq!(DirStore::claim_name(&mut used, ".env"), ".env-1");
    }

    #[test]
    fn test_timestamped_default_folder() {
        let location = DirStore::timestamped().location();
        let secs = location.strip_prefix("assets_").unwrap();
        assert!(secs.parse::<u64>().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_persist_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("dedupe");
        let store = DirStore::new(&folder);

        let first = store.persist("style.css", b"a{}").await.unwrap();
        let second = store.persist("style.css", b"b{}").await.unwrap();
        assert_ne!(first, second);
        assert_eq!(second.file_name().unwrap(), "style-1.css");
        assert_eq!(tokio::fs::read(&first).await.unwrap(), b"a{}");
        assert_eq!(tokio::fs::read(&second).await.unwrap(), b"b{}");
        assert_eq!(store.location(), folder.display().to_string());
    }

    #[tokio::test]
    async fn test_persist_failure_is_reported() {
        // 目标目录的父路径是普通文件，建目录必然失败
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let store = DirStore::new(blocker.path().join("nested"));
        let result = store.persist("x.js", b"1").await;
        assert!(matches!(result, Err(AssetScanError::PersistFailure { .. })));
    }
}
