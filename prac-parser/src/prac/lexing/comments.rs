//! Inline comments
//!
//! Everything from the first unescaped `#` to the end of a line is a note.
//! `\#` stands for a literal `#` and does not open a comment.

/// Splits a raw line into its content (escapes resolved, untrimmed) and the
/// trimmed note text. An empty note is reported as `None`.
pub fn split_comment(raw: &str) -> (String, Option<String>) {
    let mut content = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some((_, '#'))) => {
                content.push('#');
                chars.next();
            }
            '#' => {
                let note = raw[index + 1..].trim();
                let note = (!note.is_empty()).then(|| note.to_string());
                return (content, note);
            }
            _ => content.push(c),
        }
    }

    (content, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_without_comment() {
        assert_eq!(
            split_comment("  100 swim @ 1:30"),
            ("  100 swim @ 1:30".to_string(), None)
        );
    }

    #[test]
    fn trailing_comment_becomes_note() {
        let (content, note) = split_comment("  4x50 kick @ :55   # fins ok ");
        assert_eq!(content, "  4x50 kick @ :55   ");
        assert_eq!(note.as_deref(), Some("fins ok"));
    }

    #[test]
    fn comment_only_line_has_empty_content() {
        let (content, note) = split_comment("# just a comment");
        assert!(content.trim().is_empty());
        assert_eq!(note.as_deref(), Some("just a comment"));
    }

    #[test]
    fn empty_comment_has_no_note() {
        assert_eq!(split_comment("Warmup: #"), ("Warmup: ".to_string(), None));
    }

    #[test]
    fn escaped_hash_is_literal() {
        let (content, note) = split_comment(r"title: Set \#4 # second copy");
        assert_eq!(content, "title: Set #4 ");
        assert_eq!(note.as_deref(), Some("second copy"));
    }

    #[test]
    fn only_the_first_hash_opens_a_comment() {
        let (content, note) = split_comment("100 swim # easy # really");
        assert_eq!(content, "100 swim ");
        assert_eq!(note.as_deref(), Some("easy # really"));
    }
}
