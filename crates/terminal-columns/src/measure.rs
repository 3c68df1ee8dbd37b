//! Natural content width of each column.

use console::strip_ansi_codes;

use crate::util::{display_width, hard_lines};

/// Number of columns in the data: the longest row's cell count.
pub fn column_count<R, S>(rows: &[R]) -> usize
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0)
}

/// Width each column needs to show its content without wrapping.
///
/// For every column this is the display width of the widest single line in
/// any of its cells; cells with embedded newlines are measured line by line.
/// ANSI escape codes don't count. The result has one entry per column, and a
/// column where every cell is empty has width 0.
///
/// ```rust
/// use terminal_columns::content_widths;
///
/// let rows = vec![
///     vec!["id", "description"],
///     vec!["1234", "short\na much longer line"],
/// ];
/// assert_eq!(content_widths(&rows), vec![4, 18]);
/// ```
pub fn content_widths<R, S>(rows: &[R]) -> Vec<usize>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut widths = vec![0; column_count(rows)];

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.as_ref()) {
            let widest = hard_lines(cell.as_ref())
                .map(display_width)
                .max()
                .unwrap_or(0);
            *width = (*width).max(widest);
        }
    }

    log::trace!("natural column widths: {:?}", widths);
    widths
}

/// Width of the widest single character in each column.
///
/// Wrapping can break words but never characters, so this is the narrowest a
/// column can get before its lines spill past it. It is 2 for columns holding
/// CJK text or wide emoji and 1 otherwise (including all-empty columns).
///
/// ```rust
/// use terminal_columns::glyph_widths;
///
/// let rows = vec![vec!["id", "日本"], vec!["7", "ok"]];
/// assert_eq!(glyph_widths(&rows), vec![1, 2]);
/// ```
pub fn glyph_widths<R, S>(rows: &[R]) -> Vec<usize>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut widths = vec![1; column_count(rows)];
    let mut buf = [0u8; 4];

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.as_ref()) {
            let visible = strip_ansi_codes(cell.as_ref());
            let widest = visible
                .chars()
                .map(|c| display_width(c.encode_utf8(&mut buf)))
                .max()
                .unwrap_or(0);
            *width = (*width).max(widest);
        }
    }

    widths
}
