use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Clips a display value to the given width, keeping the rightmost
/// characters. The tail of a number is the part being typed, so it is
/// the part that must stay visible on a narrow terminal.
pub fn fit_display(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if text.width() <= width {
        return text.to_string();
    }

    let mut kept: Vec<char> = Vec::new();
    let mut used = 0;

    for c in text.chars().rev() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if used + char_width > width {
            break;
        }
        kept.push(c);
        used += char_width;
    }

    kept.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(fit_display("12.5", 10), "12.5");
        assert_eq!(fit_display("0", 1), "0");
    }

    #[test]
    fn long_text_keeps_the_tail() {
        assert_eq!(fit_display("123456789", 4), "6789");
        assert_eq!(fit_display("0.30000000000000004", 6), "000004");
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(fit_display("123", 0), "");
    }
}
