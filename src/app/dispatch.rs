//! Search dispatch: turns raw input into a results navigation path.

/// Builds the `/search/<term>` path for a raw query, or `None` when the
/// trimmed input is empty (no navigation, no message).
pub fn search_path(raw: &str) -> Option<String> {
    let term = raw.trim();
    if term.is_empty() {
        return None;
    }

    Some(format!("/search/{}", encode_path_segment(term)))
}

/// Percent-encodes a string for safe inclusion in a single path segment.
///
/// RFC 3986 unreserved characters pass through; every other byte is escaped,
/// so `/` inside a term cannot split the segment.
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0').to_ascii_uppercase());
                out.push(char::from_digit(u32::from(byte & 0x0f), 16).unwrap_or('0').to_ascii_uppercase());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{encode_path_segment, search_path};

    #[test]
    fn trims_before_dispatch() {
        assert_eq!(search_path("  shoes  ").as_deref(), Some("/search/shoes"));
    }

    #[test]
    fn whitespace_only_input_does_not_navigate() {
        assert_eq!(search_path("   "), None);
        assert_eq!(search_path(""), None);
    }

    #[test]
    fn slash_is_escaped_inside_the_segment() {
        assert_eq!(search_path("a/b").as_deref(), Some("/search/a%2Fb"));
    }

    #[test]
    fn spaces_and_unicode_are_percent_encoded() {
        assert_eq!(encode_path_segment("red lemonade"), "red%20lemonade");
        assert_eq!(encode_path_segment("crème"), "cr%C3%A8me");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_path_segment("A-z_0.9~"), "A-z_0.9~");
    }
}
