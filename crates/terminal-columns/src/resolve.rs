//! Width resolution algorithm for columns.
//!
//! Fixed columns keep their declared width. Flexible columns start at their
//! content width (clamped to their bounds) and, when the terminal is too
//! narrow for all of them, shrink in proportion to that starting width but
//! never below their minimum.

use std::cmp::Reverse;

use super::types::{ColumnSpec, LayoutOptions};
use super::util::display_width;

/// Resolved widths for all columns in a layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all columns (without separators).
    pub fn total(&self) -> usize {
        saturating_sum(self.widths.iter().copied())
    }

    /// Total width of a rendered line given the separator's width.
    pub fn line_width(&self, separator_width: usize) -> usize {
        let separators = separator_width.saturating_mul(self.widths.len().saturating_sub(1));
        self.total().saturating_add(separators)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Resolve a width for each column.
///
/// `natural` holds the content width of each column (see
/// [`content_widths`](crate::content_widths)); its length is the column
/// count. Columns without a spec in `options` are flexible with default
/// bounds. Specs are expected to be valid (see
/// [`ColumnSpec::validate`]).
///
/// # Example
///
/// ```rust
/// use terminal_columns::{resolve_widths, ColumnSpec, LayoutOptions};
///
/// let options = LayoutOptions::new(vec![ColumnSpec::fixed(6)]);
///
/// // Plenty of room: the flexible column keeps its content width.
/// assert_eq!(resolve_widths(&[3, 20], &options, 80).widths, vec![6, 20]);
///
/// // A 16-column terminal: 6 fixed + 2 separator leaves 8 for the flexible column.
/// assert_eq!(resolve_widths(&[3, 20], &options, 16).widths, vec![6, 8]);
/// ```
pub fn resolve_widths(
    natural: &[usize],
    options: &LayoutOptions,
    terminal_width: usize,
) -> ResolvedWidths {
    resolve_widths_with_glyphs(natural, &[], options, terminal_width)
}

/// Resolve column widths, keeping each flexible column at least as wide as
/// its widest unbreakable character.
///
/// `glyphs` holds that width per column (see
/// [`glyph_widths`](crate::glyph_widths)); missing entries count as 1. A
/// double-width character can't be wrapped, so a flexible column holding one
/// never gets less than 2 columns, even below its `min_width` or above its
/// `max_width`.
///
/// ```rust
/// use terminal_columns::{resolve_widths_with_glyphs, LayoutOptions};
///
/// // "日本" next to "x" in a 4-column terminal.
/// let resolved = resolve_widths_with_glyphs(&[4, 1], &[2, 1], &LayoutOptions::default(), 4);
/// assert_eq!(resolved.widths, vec![2, 1]);
/// ```
pub fn resolve_widths_with_glyphs(
    natural: &[usize],
    glyphs: &[usize],
    options: &LayoutOptions,
    terminal_width: usize,
) -> ResolvedWidths {
    if natural.is_empty() {
        return ResolvedWidths { widths: vec![] };
    }

    let default_spec = ColumnSpec::default();
    let specs: Vec<&ColumnSpec> = (0..natural.len())
        .map(|i| options.spec(i).unwrap_or(&default_spec))
        .collect();

    let separator_width = display_width(&options.separator);
    let mut reserved = separator_width.saturating_mul(natural.len() - 1);
    let mut widths: Vec<usize> = Vec::with_capacity(natural.len());
    let mut flexible: Vec<usize> = Vec::new();
    let mut floors: Vec<usize> = Vec::new();

    // First pass: fixed columns take their width, flexible ones their clamped content width
    for (i, (spec, &content)) in specs.iter().zip(natural).enumerate() {
        match spec.width {
            Some(w) => {
                widths.push(w);
                reserved = reserved.saturating_add(w);
            }
            None => {
                let floor = spec.floor().max(glyphs.get(i).copied().unwrap_or(1));
                widths.push(content.clamp(floor, spec.ceiling().max(floor)));
                flexible.push(i);
                floors.push(floor);
            }
        }
    }

    let available = terminal_width.saturating_sub(reserved);
    let wanted = saturating_sum(flexible.iter().map(|&i| widths[i]));

    if wanted > available {
        log::debug!(
            "columns overflow terminal: flexible columns want {} of {} available",
            wanted,
            available
        );
        shrink(&mut widths, &flexible, &floors, available);
        log::debug!("shrunk column widths: {:?}", widths);
    }

    ResolvedWidths { widths }
}

fn saturating_sum(values: impl Iterator<Item = usize>) -> usize {
    values.fold(0, usize::saturating_add)
}

/// Shrink the flexible columns so their sum fits `budget`.
///
/// Each column gets its floor-rounded proportional share, raised to its
/// floor. Any excess caused by floors is taken back one unit at a time from
/// the widest columns still above their floor; rounding leftovers go back one
/// unit at a time to columns in descending order of starting width.
fn shrink(widths: &mut [usize], flexible: &[usize], floors: &[usize], budget: usize) {
    let start: Vec<usize> = flexible.iter().map(|&i| widths[i]).collect();
    let total = saturating_sum(start.iter().copied());
    if total == 0 {
        return;
    }

    for ((&i, &wanted), &floor) in flexible.iter().zip(&start).zip(floors) {
        let share = (wanted as u128 * budget as u128 / total as u128) as usize;
        widths[i] = share.max(floor);
    }

    let mut used = saturating_sum(flexible.iter().map(|&i| widths[i]));

    while used > budget {
        let widest = flexible
            .iter()
            .zip(floors)
            .filter(|&(&i, &floor)| widths[i] > floor)
            .max_by_key(|&(&i, _)| (widths[i], Reverse(i)))
            .map(|(&i, _)| i);

        match widest {
            Some(i) => {
                widths[i] -= 1;
                used -= 1;
            }
            // Every flexible column is at its minimum; accept the overflow
            None => break,
        }
    }

    let mut order: Vec<usize> = (0..flexible.len()).collect();
    order.sort_by_key(|&k| Reverse(start[k]));

    while used < budget {
        let mut grew = false;
        for &k in &order {
            if used == budget {
                break;
            }
            let i = flexible[k];
            if widths[i] < start[k] {
                widths[i] += 1;
                used += 1;
                grew = true;
            }
        }
        if !grew {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(columns: Vec<ColumnSpec>) -> LayoutOptions {
        LayoutOptions::new(columns)
    }

    fn unseparated(columns: Vec<ColumnSpec>) -> LayoutOptions {
        LayoutOptions::new(columns).separator("")
    }

    #[test]
    fn resolve_no_columns() {
        let resolved = resolve_widths(&[], &LayoutOptions::default(), 80);
        assert!(resolved.is_empty());
    }

    #[test]
    fn resolve_keeps_content_width_when_it_fits() {
        let resolved = resolve_widths(&[2, 2], &LayoutOptions::default(), 20);
        assert_eq!(resolved.widths, vec![2, 2]);
    }

    #[test]
    fn resolve_does_not_stretch_content() {
        let resolved = resolve_widths(&[3, 4], &LayoutOptions::default(), 200);
        assert_eq!(resolved.widths, vec![3, 4]);
        assert_eq!(resolved.line_width(2), 9);
    }

    #[test]
    fn resolve_empty_column_gets_one() {
        let resolved = resolve_widths(&[0, 5], &LayoutOptions::default(), 80);
        assert_eq!(resolved.widths, vec![1, 5]);
    }

    #[test]
    fn resolve_clamps_to_max() {
        let resolved = resolve_widths(&[20], &options(vec![ColumnSpec::auto().max_width(5)]), 80);
        assert_eq!(resolved.widths, vec![5]);
    }

    #[test]
    fn resolve_raises_to_min() {
        let resolved = resolve_widths(&[2], &options(vec![ColumnSpec::auto().min_width(10)]), 80);
        assert_eq!(resolved.widths, vec![10]);
    }

    #[test]
    fn resolve_shrinks_proportionally() {
        // 34 - 2 * 2 separator = 30 available for 60 wanted
        let resolved = resolve_widths(&[10, 20, 30], &LayoutOptions::default(), 34);
        assert_eq!(resolved.widths, vec![5, 10, 15]);
        assert_eq!(resolved.line_width(2), 34);
    }

    #[test]
    fn resolve_hands_rounding_leftovers_to_widest_first() {
        let resolved = resolve_widths(&[8, 12, 10], &unseparated(vec![]), 20);
        // Shares: 5, 8, 6 = 19; leftover goes to the widest (index 1)
        assert_eq!(resolved.widths, vec![5, 9, 6]);
    }

    #[test]
    fn resolve_rounding_ties_go_to_lowest_index() {
        let resolved = resolve_widths(&[10, 10, 10], &unseparated(vec![]), 20);
        assert_eq!(resolved.widths, vec![7, 7, 6]);
    }

    #[test]
    fn resolve_counts_separator_width() {
        let opts = LayoutOptions::default().separator(" | ");
        let resolved = resolve_widths(&[10, 10], &opts, 20);
        assert_eq!(resolved.widths, vec![9, 8]);
        assert_eq!(resolved.line_width(3), 20);
    }

    #[test]
    fn resolve_min_width_takes_from_other_columns() {
        let opts = unseparated(vec![ColumnSpec::auto().min_width(25)]);
        let resolved = resolve_widths(&[30, 30], &opts, 30);
        assert_eq!(resolved.widths, vec![25, 5]);
    }

    #[test]
    fn resolve_accepts_overflow_at_min_widths() {
        let opts = unseparated(vec![
            ColumnSpec::auto().min_width(15),
            ColumnSpec::auto().min_width(15),
        ]);
        let resolved = resolve_widths(&[20, 20], &opts, 20);
        assert_eq!(resolved.widths, vec![15, 15]);
    }

    #[test]
    fn resolve_never_alters_fixed_width() {
        let opts = options(vec![ColumnSpec::fixed(50), ColumnSpec::auto()]);
        let resolved = resolve_widths(&[3, 40], &opts, 30);
        assert_eq!(resolved.widths, vec![50, 1]);
    }

    #[test]
    fn resolve_fixed_width_ignores_content() {
        let opts = options(vec![ColumnSpec::fixed(4), ColumnSpec::fixed(6)]);
        let resolved = resolve_widths(&[100, 1], &opts, 80);
        assert_eq!(resolved.widths, vec![4, 6]);
    }

    #[test]
    fn resolve_fixed_and_flexible_share_budget() {
        let opts = options(vec![ColumnSpec::fixed(10)]);
        // 40 - 10 fixed - 2 separator = 28 for the flexible column
        let resolved = resolve_widths(&[5, 60], &opts, 40);
        assert_eq!(resolved.widths, vec![10, 28]);
    }

    #[test]
    fn resolve_keeps_wide_glyphs_whole() {
        let resolved = resolve_widths_with_glyphs(&[4, 1], &[2, 1], &LayoutOptions::default(), 4);
        assert_eq!(resolved.widths, vec![2, 1]);
    }

    #[test]
    fn resolve_glyph_floor_beats_max_width() {
        let opts = options(vec![ColumnSpec::auto().max_width(1)]);
        let resolved = resolve_widths_with_glyphs(&[6], &[2], &opts, 80);
        assert_eq!(resolved.widths, vec![2]);
    }

    #[test]
    fn resolve_glyph_floor_takes_from_narrow_columns() {
        // 3 columns of budget: the wide-glyph column can't drop below 2
        let resolved = resolve_widths_with_glyphs(&[20, 2], &[2, 1], &unseparated(vec![]), 3);
        assert_eq!(resolved.widths, vec![2, 1]);
    }

    #[test]
    fn resolve_huge_fixed_width_saturates() {
        let opts = options(vec![ColumnSpec::fixed(usize::MAX)]);
        let resolved = resolve_widths(&[3, 10], &opts, 80);
        assert_eq!(resolved.widths, vec![usize::MAX, 1]);
        assert_eq!(resolved.total(), usize::MAX);
        assert_eq!(resolved.line_width(2), usize::MAX);
    }

    #[test]
    fn resolve_huge_min_widths_saturate() {
        let opts = options(vec![
            ColumnSpec::auto().min_width(usize::MAX),
            ColumnSpec::auto().min_width(usize::MAX),
        ]);
        let resolved = resolve_widths(&[1, 1], &opts, 80);
        assert_eq!(resolved.widths, vec![usize::MAX, usize::MAX]);
    }

    #[test]
    fn resolved_widths_accessors() {
        let resolved = ResolvedWidths {
            widths: vec![10, 20, 30],
        };

        assert_eq!(resolved.get(0), Some(10));
        assert_eq!(resolved.get(2), Some(30));
        assert_eq!(resolved.get(3), None);
        assert_eq!(resolved.total(), 60);
        assert_eq!(resolved.len(), 3);
        assert!(!resolved.is_empty());
    }
}
