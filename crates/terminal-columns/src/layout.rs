//! Layout entry points: validate, measure, resolve, render.

use super::error::{ColumnsError, Result};
use super::measure::{column_count, content_widths, glyph_widths};
use super::render::render_row;
use super::resolve::{resolve_widths_with_glyphs, ResolvedWidths};
use super::terminal::terminal_width;
use super::types::{LayoutConfig, LayoutOptions};

/// Column widths resolved against a set of rows, ready to render them.
///
/// This is the reusable form of [`layout_columns_with_width`]: resolve once,
/// then render all rows together or one at a time (for interleaving other
/// output between rows).
///
/// # Example
///
/// ```rust
/// use terminal_columns::{ColumnLayout, ColumnSpec, LayoutOptions};
///
/// let rows = vec![
///     vec!["abc123", "src/main.rs", "pending"],
///     vec!["def456", "src/lib.rs", "done"],
/// ];
/// let options = LayoutOptions::new(vec![ColumnSpec::fixed(8)]);
///
/// let layout = ColumnLayout::new(&rows, 80, &options).unwrap();
/// assert_eq!(layout.widths().widths, vec![8, 11, 7]);
/// assert_eq!(layout.render_row(&rows[1]), vec!["def456    src/lib.rs   done"]);
/// ```
#[derive(Clone, Debug)]
pub struct ColumnLayout {
    options: LayoutOptions,
    widths: ResolvedWidths,
}

impl ColumnLayout {
    /// Validate `options` against `rows` and resolve the column widths.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnsError`] if the terminal width is zero, if there are
    /// more column specs than columns, or if a spec is invalid.
    pub fn new<R, S>(rows: &[R], terminal_width: usize, options: &LayoutOptions) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if terminal_width == 0 {
            return Err(ColumnsError::InvalidTerminalWidth);
        }
        validate(options, column_count(rows))?;

        let natural = content_widths(rows);
        let glyphs = glyph_widths(rows);
        let widths = resolve_widths_with_glyphs(&natural, &glyphs, options, terminal_width);

        Ok(ColumnLayout {
            options: options.clone(),
            widths,
        })
    }

    /// The resolved column widths.
    pub fn widths(&self) -> &ResolvedWidths {
        &self.widths
    }

    /// The options this layout was resolved with.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }

    /// Render one row into its output lines.
    pub fn render_row<S: AsRef<str>>(&self, row: &[S]) -> Vec<String> {
        render_row(row, &self.widths, &self.options)
    }

    /// Render all rows, joined with newlines.
    pub fn render<R, S>(&self, rows: &[R]) -> String
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        rows.iter()
            .flat_map(|row| self.render_row(row.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Check column specs against the number of data columns.
///
/// # Errors
///
/// [`ColumnsError::TooManyColumnSpecs`] when there are more specs than
/// columns, otherwise the first error from [`ColumnSpec::validate`](crate::ColumnSpec::validate).
pub fn validate(options: &LayoutOptions, columns: usize) -> Result<()> {
    if options.columns.len() > columns {
        return Err(ColumnsError::TooManyColumnSpecs {
            specs: options.columns.len(),
            columns,
        });
    }
    for (i, spec) in options.columns.iter().enumerate() {
        spec.validate(i)?;
    }
    Ok(())
}

/// Lay out rows as columns sized for the current terminal.
///
/// The terminal width comes from [`terminal_width`], falling back to 80
/// columns when output isn't a terminal. See [`layout_columns_with_width`].
pub fn layout_columns<R, S>(rows: &[R], config: impl Into<LayoutConfig>) -> Result<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    layout_columns_with_width(rows, terminal_width(), config)
}

/// Lay out rows as columns that fit `terminal_width`.
///
/// `config` is anything convertible into a [`LayoutConfig`]: options, a bare
/// list of column specs, [`Breakpoints`](crate::Breakpoints), or a function of
/// the terminal width. Empty input (no rows, or only empty rows) renders as
/// an empty string.
///
/// # Errors
///
/// Fails before rendering anything if the terminal width is zero, if more
/// column specs are given than the rows have columns, or if a spec is
/// invalid.
///
/// # Example
///
/// ```rust
/// use terminal_columns::{layout_columns_with_width, LayoutOptions};
///
/// let rows = vec![vec!["a", "b"], vec!["cc", "dd"]];
/// let output = layout_columns_with_width(&rows, 20, LayoutOptions::default()).unwrap();
/// assert_eq!(output, "a   b\ncc  dd");
/// ```
pub fn layout_columns_with_width<R, S>(
    rows: &[R],
    terminal_width: usize,
    config: impl Into<LayoutConfig>,
) -> Result<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    if column_count(rows) == 0 {
        return Ok(String::new());
    }

    let config = config.into();
    let options = config.options_for(terminal_width);
    let layout = ColumnLayout::new(rows, terminal_width, &options)?;
    Ok(layout.render(rows))
}
