//! ANSI-aware text measurement, padding, and wrapping.
//!
//! All functions in this module handle ANSI escape codes: they are preserved
//! in output but don't count toward display width.

use console::{measure_text_width, pad_str, Alignment};
use textwrap::{Options, WordSeparator, WrapAlgorithm};

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// Wide characters (CJK, most emoji) count as two columns.
///
/// # Example
///
/// ```rust
/// use terminal_columns::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// Strings already at or over the width are returned unchanged.
///
/// ```rust
/// use terminal_columns::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use terminal_columns::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Word-wraps text to the given display width.
///
/// Embedded newlines are hard breaks, with `\r\n` treated like `\n`. Words
/// wider than `width` are broken across lines. Trailing whitespace is dropped from each line. Always
/// returns at least one line, so an empty string wraps to `[""]`.
///
/// ```rust
/// use terminal_columns::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("line1\nline2", 20), vec!["line1", "line2"]);
/// ```
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    let options = Options::new(width.max(1))
        .break_words(true)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    hard_lines(s)
        .flat_map(|segment| textwrap::wrap(segment, &options))
        .map(|line| line.into_owned())
        .collect()
}

/// Splits text on hard line breaks, the unit measured for natural width.
pub(crate) fn hard_lines(s: &str) -> impl Iterator<Item = &str> {
    s.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width(" "), 1);
    }

    #[test]
    fn display_width_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width("\x1b[1;32mbold green\x1b[0m"), 10);
        assert_eq!(display_width("\x1b[38;5;196mcolor\x1b[0m"), 5);
    }

    #[test]
    fn display_width_unicode() {
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width("café"), 4);
    }

    #[test]
    fn pad_right_basic() {
        assert_eq!(pad_right("42", 5), "42   ");
        assert_eq!(pad_right("", 3), "   ");
        assert_eq!(pad_right("hello", 5), "hello");
    }

    #[test]
    fn pad_left_basic() {
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_left("", 2), "  ");
    }

    #[test]
    fn pad_keeps_ansi_out_of_width() {
        let styled = "\x1b[31mhi\x1b[0m";
        let padded = pad_right(styled, 5);
        assert!(padded.starts_with("\x1b[31m"));
        assert_eq!(display_width(&padded), 5);
    }

    #[test]
    fn wrap_at_word_boundaries() {
        assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
    }

    #[test]
    fn wrap_breaks_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_respects_newlines() {
        assert_eq!(wrap("line1\nline2", 20), vec!["line1", "line2"]);
        assert_eq!(wrap("a\n\nb", 20), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_treats_crlf_as_newline() {
        assert_eq!(wrap("a\r\nbb", 20), vec!["a", "bb"]);
        assert_eq!(wrap("one two\r\n\r\nthree", 4), vec!["one", "two", "", "three"]);
    }

    #[test]
    fn wrap_empty_is_one_blank_line() {
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn wrap_zero_width_behaves_as_one() {
        assert_eq!(wrap("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn wrap_ignores_ansi_for_width() {
        let lines = wrap("\x1b[31mhello world\x1b[0m", 5);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(display_width(line) <= 5);
        }
    }

    #[test]
    fn hard_lines_strip_carriage_returns() {
        let lines: Vec<&str> = hard_lines("a\r\nbb").collect();
        assert_eq!(lines, vec!["a", "bb"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn wrapped_lines_fit_width(
            s in "[a-zA-Z0-9 ]{0,100}",
            width in 1usize..40,
        ) {
            for line in wrap(&s, width) {
                prop_assert!(
                    display_width(&line) <= width,
                    "line '{}' exceeds width {}",
                    line, width
                );
            }
        }

        #[test]
        fn wrapped_wide_text_fits_width(
            s in "([日本語a-z ]{0,8}(\r\n|\n)?){0,5}",
            width in 2usize..20,
        ) {
            for line in wrap(&s, width) {
                prop_assert!(!line.contains('\r'));
                prop_assert!(display_width(&line) <= width);
            }
        }

        #[test]
        fn pad_produces_exact_width_when_larger(
            s in "[a-zA-Z0-9]{0,20}",
            extra in 1usize..30,
        ) {
            let target = display_width(&s) + extra;
            prop_assert_eq!(display_width(&pad_left(&s, target)), target);
            prop_assert_eq!(display_width(&pad_right(&s, target)), target);
        }
    }
}
