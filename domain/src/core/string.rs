//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// First `max_chars` characters of a string, without any ellipsis.
pub fn char_prefix(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Split a camelCase identifier into lowercase space separated words.
///
/// `"problemClarity"` becomes `"problem clarity"`.
pub fn humanize_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "é" is 2 bytes; never split inside it
        assert_eq!(truncate("café au lait", 6), "caf...");
        assert_eq!(truncate("ééééé", 7), "éé...");
    }

    #[test]
    fn test_char_prefix_counts_chars() {
        assert_eq!(char_prefix("abcdef", 3), "abc");
        assert_eq!(char_prefix("ééé", 2), "éé");
        assert_eq!(char_prefix("ab", 200), "ab");
    }

    #[test]
    fn test_humanize_camel() {
        assert_eq!(humanize_camel("problemClarity"), "problem clarity");
        assert_eq!(humanize_camel("timeToMarket"), "time to market");
        assert_eq!(humanize_camel("competition"), "competition");
    }
}
