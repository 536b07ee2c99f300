//! Shared component helpers.

/// Collapses whitespace and truncates text to a single-line preview.
pub fn short_preview(text: &str, max_chars: usize) -> String {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.chars().count() <= max_chars {
        return normalized;
    }

    if max_chars <= 3 {
        return normalized.chars().take(max_chars).collect();
    }

    let mut out = String::new();
    for ch in normalized.chars().take(max_chars - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::short_preview;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(short_preview("Irish  Butter\n454g", 40), "Irish Butter 454g");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let preview = short_preview("a very long product description indeed", 12);
        assert_eq!(preview.chars().count(), 12);
        assert!(preview.ends_with("..."));
    }
}
