//! Greedy word wrapping measured in terminal cells.

use ratatui::text::Span;

/// Width of `text` in terminal cells.
pub fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Wraps `text` into rows of at most `width` cells.
///
/// Whitespace runs collapse to a single space. Words wider than `width` are
/// split across rows. Blank input yields no rows.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let mut buf = [0u8; 4];
            let ch_width = display_width(ch.encode_utf8(&mut buf));
            if current_width + ch_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Longest prefix of `text` that fits in `width` cells.
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        let ch_width = display_width(ch.encode_utf8(&mut buf));
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// `text` cut to `width` cells, ending in `…` when something was dropped.
pub fn clip(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = truncate(text, width - 1);
    out.push('…');
    out
}

/// Like [`wrap`], but blank text still takes one (empty) row.
pub fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let rows = wrap(text, width);
    if rows.is_empty() {
        vec![String::new()]
    } else {
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn blank_text_has_no_rows() {
        assert!(wrap("   ", 10).is_empty());
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn long_words_are_split() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn accented_text_is_measured_by_cells() {
        assert_eq!(wrap("Análise e Inovação", 9), vec!["Análise e", "Inovação"]);
    }

    #[test]
    fn zero_width_still_makes_progress() {
        assert_eq!(wrap("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn truncate_stops_before_wide_glyphs() {
        assert_eq!(truncate("ab📧cd", 3), "ab");
        assert_eq!(truncate("ab📧cd", 4), "ab📧");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn clip_marks_dropped_text() {
        assert_eq!(clip("Inovação Tecnológica", 10), "Inovação …");
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("abc", 0), "");
    }

    #[test]
    fn wrap_rows_keeps_one_row_for_blank_text() {
        assert_eq!(wrap_rows("", 5), vec![String::new()]);
        assert_eq!(wrap_rows("a b", 1), vec!["a", "b"]);
    }
}
