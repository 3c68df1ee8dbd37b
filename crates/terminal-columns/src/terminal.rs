//! Terminal width detection.

/// Width used when the terminal size can't be determined (e.g. piped output).
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Gets the current terminal width, or None if not available.
pub(crate) fn get_terminal_width() -> Option<usize> {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .filter(|&w| w > 0)
}

/// Width of the attached terminal in columns.
///
/// Falls back to [`DEFAULT_TERMINAL_WIDTH`] when stdout is not a terminal.
pub fn terminal_width() -> usize {
    get_terminal_width().unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
