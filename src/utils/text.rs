//! 文本截断工具（按字符而非字节计数，保证不切断UTF-8字符）

/// 字符数
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// 截取前 `max_chars` 个字符
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("资源提取器", 2), "资源");
        assert_eq!(char_len("资源提取器"), 5);
    }
}
