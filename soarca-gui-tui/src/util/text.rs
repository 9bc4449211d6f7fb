//! Text helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("Playbooks", 20), "Playbooks");
    }

    #[test]
    fn long_text_ends_with_ellipsis() {
        assert_eq!(truncate("Cloud Resource Misconfiguration", 10), "Cloud Res…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(truncate("剧本清单列表", 5), "剧本…");
    }
}
