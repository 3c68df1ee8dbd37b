//! Row rendering: wrap each cell to its column and stitch the lines together.

use console::truncate_str;

use super::resolve::ResolvedWidths;
use super::types::{Align, LayoutOptions};
use super::util::{display_width, pad_left, pad_right, wrap};

/// Render one row into one or more output lines.
///
/// Each cell is word-wrapped to its column width (newlines in the cell are
/// hard breaks), then the cells' lines are joined side by side with the
/// separator. Shorter cells are filled with blank lines so every cell spans
/// the row's full height. Cells missing from the end of the row render as
/// blanks. Trailing spaces are trimmed from each line.
///
/// A character wider than its column (a CJK character in a fixed 1-wide
/// column) is cut rather than spilling into the next column.
///
/// # Example
///
/// ```rust
/// use terminal_columns::{render_row, LayoutOptions, ResolvedWidths};
///
/// let widths = ResolvedWidths { widths: vec![5, 6] };
/// let lines = render_row(&["one two", "x"], &widths, &LayoutOptions::default());
/// assert_eq!(lines, vec!["one    x", "two"]);
/// ```
pub fn render_row<S: AsRef<str>>(
    row: &[S],
    widths: &ResolvedWidths,
    options: &LayoutOptions,
) -> Vec<String> {
    let cells: Vec<Vec<String>> = widths
        .widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let value = row.get(i).map(|s| s.as_ref()).unwrap_or("");
            wrap(value, width)
                .into_iter()
                .map(|line| fit(line, width))
                .collect()
        })
        .collect();

    let height = cells.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|line_idx| {
            let mut line = String::new();

            for (i, (cell, &width)) in cells.iter().zip(&widths.widths).enumerate() {
                if i > 0 {
                    line.push_str(&options.separator);
                }

                let content = cell.get(line_idx).map(String::as_str).unwrap_or("");
                let align = options.spec(i).map(|spec| spec.align).unwrap_or_default();
                let padded = match align {
                    Align::Left => pad_right(content, width),
                    Align::Right => pad_left(content, width),
                };
                line.push_str(&padded);
            }

            let trimmed = line.trim_end_matches(' ').len();
            line.truncate(trimmed);
            line
        })
        .collect()
}

fn fit(line: String, width: usize) -> String {
    if display_width(&line) <= width {
        return line;
    }
    log::debug!("cutting {:?} to fit a {}-wide column", line, width);
    truncate_str(&line, width, "").into_owned()
}
