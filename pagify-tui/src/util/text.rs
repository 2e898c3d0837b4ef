//! 按显示宽度截断 / 填充文本
//!
//! 书名、作者名里常有 CJK 字符，按 `char` 个数对齐会错位。

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到 `width` 列以内，超出部分以 `…` 结尾
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 截断并右侧补空格，使结果恰好占 `width` 列
pub fn fit(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_padded() {
        assert_eq!(fit("Dune", 6), "Dune  ");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("Project Hail Mary", 8), "Project…");
        assert_eq!(fit("Project Hail Mary", 8).width(), 8);
    }

    #[test]
    fn wide_chars_count_double() {
        // 每个汉字占两列
        assert_eq!(truncate("三体三体", 5), "三体…");
        assert_eq!(fit("三体", 6), "三体  ");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate("anything", 0), "");
    }
}
