//! Text fitting helpers

/// Longest catalog path shown in the admin list
pub const MAX_PATH_CHARS: usize = 40;

/// Keep the last `max_chars` characters, marking the cut with `...`
pub fn fit_tail(text: &str, max_chars: usize) -> String {
    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }
    let tail: String = text.chars().skip(len - max_chars).collect();
    format!("...{}", tail)
}

pub fn shorten_path(path: &str) -> String {
    fit_tail(path, MAX_PATH_CHARS)
}

/// Keep the first `max_chars` characters, marking the cut with `...`
pub fn fit_head(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(fit_tail("abc", 3), "abc");
        assert_eq!(shorten_path("/games/doom"), "/games/doom");
    }

    #[test]
    fn test_long_path_keeps_tail() {
        let path = format!("/very/long/prefix/{}", "x".repeat(40));
        let short = shorten_path(&path);
        assert_eq!(short, format!("...{}", "x".repeat(40)));
    }

    #[test]
    fn test_fit_head() {
        assert_eq!(fit_head("Shooter", 10), "Shooter");
        assert_eq!(fit_head("A long description", 6), "A long...");
    }

    #[test]
    fn test_multibyte_boundary() {
        assert_eq!(fit_tail("ääää", 2), "...ää");
    }
}
