//! 文本显示宽度处理

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断文本，超出时以 "…" 结尾
///
/// 中文等宽字符占两列，按字节或字符数截断会导致表格错位。
pub fn truncate_display(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        // 预留一列给省略号
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_display("Dune", 10), "Dune");
        assert_eq!(truncate_display("", 3), "");
    }

    #[test]
    fn test_truncates_ascii() {
        assert_eq!(truncate_display("Foundation", 5), "Foun…");
    }

    #[test]
    fn test_truncates_by_display_width() {
        // 每个汉字占两列
        let out = truncate_display("三体三部曲", 6);
        assert_eq!(out, "三体…");
        assert!(out.width() <= 6);
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate_display("abc", 0), "");
    }
}
