//! Span - 源码位置信息

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// 把 span 限制在 `source` 之内
///
/// 落在输入末尾的空 span 会改为覆盖最后一个字符，这样仍能在源码行上画出标记。
pub fn clamp(span: &Span, source: &str) -> Span {
    let len = source.len();
    let start = span.start.min(len);
    let end = span.end.clamp(start, len);
    if start == end && start == len {
        if let Some((last, _)) = source.char_indices().next_back() {
            return last..len;
        }
    }
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside() {
        assert_eq!(clamp(&(2..3), "0123456789"), 2..3);
    }

    #[test]
    fn test_clamp_past_end() {
        let source = "0123456789";
        assert_eq!(clamp(&(8..20), source), 8..10);
        assert_eq!(clamp(&(10..10), source), 9..10);
        assert_eq!(clamp(&(15..15), source), 9..10);
    }

    #[test]
    fn test_clamp_end_after_multibyte_char() {
        // `é` 占两个字节
        assert_eq!(clamp(&(6..6), "a = é"), 4..6);
    }

    #[test]
    fn test_clamp_empty_source() {
        assert_eq!(clamp(&(0..0), ""), 0..0);
    }
}
