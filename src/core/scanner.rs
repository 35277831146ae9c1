#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentPolicy {
    /// 行上第一個 "//" 一律視為註解起點，連字串字面值內的也算
    Naive,
    /// 追蹤引號狀態，跳過字串字面值內的 "//"
    #[default]
    QuoteAware,
}

impl CommentPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "naive" => Some(CommentPolicy::Naive),
            "quote-aware" | "quote_aware" => Some(CommentPolicy::QuoteAware),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentPolicy::Naive => "naive",
            CommentPolicy::QuoteAware => "quote-aware",
        }
    }
}

/// 回傳行上第一個不在字串字面值內的 "//" 的位元組位置。
///
/// 引號狀態只在單行內追蹤，換行即重置；跨行的樣板字串不在處理範圍。
pub fn find_comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    i += 2;
                    continue;
                }
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'\'' | b'"' | b'`' => quote = Some(b),
                b'/' if i + 1 < bytes.len() && bytes[i + 1] == b'/' => return Some(i),
                _ => {}
            },
        }
        i += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_at_line_start() {
        assert_eq!(find_comment_start("// hello"), Some(0));
    }

    #[test]
    fn test_marker_after_code() {
        assert_eq!(find_comment_start("let x = 1; // hello"), Some(11));
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(find_comment_start("let x = 1;"), None);
        assert_eq!(find_comment_start(""), None);
    }

    #[test]
    fn test_single_slash_is_not_a_marker() {
        assert_eq!(find_comment_start("const half = total / 2;"), None);
    }

    #[test]
    fn test_marker_inside_double_quotes_ignored() {
        assert_eq!(find_comment_start("const url = \"http://example.com\";"), None);
    }

    #[test]
    fn test_marker_inside_single_quotes_ignored() {
        assert_eq!(find_comment_start("const s = '//not a comment';"), None);
    }

    #[test]
    fn test_marker_inside_template_literal_ignored() {
        assert_eq!(find_comment_start("const s = `//tpl`;"), None);
    }

    #[test]
    fn test_marker_after_closed_string_found() {
        let line = "const url = \"http://a\"; // real comment";
        assert_eq!(find_comment_start(line), Some(24));
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        assert_eq!(find_comment_start(r#"const s = "a\"b//c";"#), None);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(CommentPolicy::parse("naive"), Some(CommentPolicy::Naive));
        assert_eq!(
            CommentPolicy::parse("quote-aware"),
            Some(CommentPolicy::QuoteAware)
        );
        assert_eq!(CommentPolicy::parse("lexer"), None);
    }
}
