//! Title detection for plain-text documents.
//!
//! A plain-text file declares its title by putting it on the first line and
//! following it with exactly two blank lines:
//!
//! ```text
//! Silver Blaze
//!
//!
//! I am afraid, Watson, that I shall have to go...
//! ```
//!
//! The rule is strict on purpose: one blank separator line is *not* enough,
//! and a file with fewer than three lines has no title. This only applies to
//! plain documents — markup documents take their title from a leading header
//! (see [`crate::markup`]).

/// Return the title line iff the first three lines match the pattern:
/// non-empty, empty, empty. Trailing whitespace is stripped before testing,
/// so a second line of only spaces still counts as blank.
pub fn detect_title(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().take(3).map(str::trim_end).collect();
    match lines.as_slice() {
        [first, "", ""] if !first.is_empty() => Some((*first).to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_blank_lines_give_title() {
        assert_eq!(
            detect_title("Silver Blaze\n\n\nI am afraid..."),
            Some("Silver Blaze".to_string())
        );
    }

    #[test]
    fn title_with_no_body_still_detected() {
        // Three lines exist even when nothing follows the blanks.
        assert_eq!(detect_title("Silver Blaze\n\n\n"), Some("Silver Blaze".to_string()));
    }

    #[test]
    fn one_blank_line_is_not_enough() {
        assert_eq!(detect_title("Silver Blaze\n\nI am afraid..."), None);
    }

    #[test]
    fn no_blank_lines_is_not_a_title() {
        assert_eq!(detect_title("Silver Blaze\nI am\nafraid"), None);
    }

    #[test]
    fn fewer_than_three_lines_is_not_a_title() {
        assert_eq!(detect_title("Silver Blaze"), None);
        assert_eq!(detect_title("Silver Blaze\n"), None);
        assert_eq!(detect_title("Silver Blaze\n\n"), None);
        assert_eq!(detect_title(""), None);
    }

    #[test]
    fn empty_first_line_is_not_a_title() {
        assert_eq!(detect_title("\n\n\nbody"), None);
    }

    #[test]
    fn trailing_whitespace_stripped_from_title() {
        assert_eq!(
            detect_title("Silver Blaze   \n\n\nbody"),
            Some("Silver Blaze".to_string())
        );
    }

    #[test]
    fn whitespace_only_separator_lines_count_as_blank() {
        assert_eq!(
            detect_title("Silver Blaze\n   \n\t\nbody"),
            Some("Silver Blaze".to_string())
        );
    }

    #[test]
    fn non_empty_third_line_is_not_a_title() {
        assert_eq!(detect_title("Silver Blaze\n\nbody\n"), None);
    }
}
