//! # Terminal Columns - Column Layout for Terminal Output
//!
//! `terminal-columns` lays out rows of text as aligned columns that fit a
//! terminal of a given width. Cells wrap within their column, may contain
//! newlines, and may carry ANSI styling (escape codes don't count toward
//! width; CJK characters count as two columns).
//!
//! ## Core Concepts
//!
//! - [`ColumnSpec`]: Per-column sizing policy, fixed or flexible with bounds
//! - [`LayoutOptions`]: Column specs plus the separator between columns
//! - [`LayoutConfig`]: Options that are static or computed from the terminal width
//! - [`Breakpoints`]: Pick options by terminal-width thresholds
//! - [`ColumnLayout`]: Widths resolved once, for rendering rows repeatedly
//!
//! ## Quick Start
//!
//! ```rust
//! use terminal_columns::{layout_columns_with_width, LayoutOptions};
//!
//! let rows = vec![
//!     vec!["name", "size"],
//!     vec!["Cargo.toml", "1.2K"],
//!     vec!["README.md", "880"],
//! ];
//!
//! let output = layout_columns_with_width(&rows, 80, LayoutOptions::default()).unwrap();
//! assert_eq!(output, "name        size\nCargo.toml  1.2K\nREADME.md   880");
//! ```
//!
//! Use [`layout_columns`] to size for the attached terminal instead.
//!
//! ## Width Resolution
//!
//! - Columns with a fixed `width` are never resized.
//! - Flexible columns start at their content width, clamped to
//!   `min_width..=max_width`. They are not stretched beyond their content.
//! - When the terminal is too narrow, flexible columns shrink in proportion to
//!   their starting width, never below `min_width` (default 1). If even the
//!   minimums don't fit, the output is allowed to overflow.
//!
//! ```rust
//! use terminal_columns::{layout_columns_with_width, ColumnSpec};
//!
//! let rows = vec![vec!["id", "a description that is far too long to fit"]];
//! let specs = vec![ColumnSpec::fixed(4), ColumnSpec::auto().min_width(10)];
//!
//! let output = layout_columns_with_width(&rows, 24, specs).unwrap();
//! assert_eq!(
//!     output,
//!     "id    a description that\n      is far too long to\n      fit"
//! );
//! ```
//!
//! ## Responsive Options
//!
//! ```rust
//! use terminal_columns::{layout_columns_with_width, Breakpoints, ColumnSpec, LayoutOptions};
//!
//! let breakpoints = Breakpoints::new()
//!     .at(60, LayoutOptions::new(vec![ColumnSpec::fixed(10)]).separator(" | "))
//!     .otherwise(LayoutOptions::default().separator(" "));
//!
//! let rows = vec![vec!["key", "value"]];
//! let wide = layout_columns_with_width(&rows, 100, breakpoints.clone()).unwrap();
//! let narrow = layout_columns_with_width(&rows, 30, breakpoints).unwrap();
//!
//! assert_eq!(wide, "key        | value");
//! assert_eq!(narrow, "key value");
//! ```
//!
//! ## Config Files
//!
//! Options can be loaded from YAML or JSON with [`LayoutOptions::from_yaml`]
//! and [`LayoutOptions::from_json`].

mod error;
mod layout;
mod measure;
mod render;
mod resolve;
mod terminal;
mod types;
mod util;

pub use error::{ColumnsError, Result};
pub use layout::{layout_columns, layout_columns_with_width, validate, ColumnLayout};
pub use measure::{column_count, content_widths, glyph_widths};
pub use render::render_row;
pub use resolve::{resolve_widths, resolve_widths_with_glyphs, ResolvedWidths};
pub use terminal::{terminal_width, DEFAULT_TERMINAL_WIDTH};
pub use types::{
    Align, Breakpoints, ColumnSpec, LayoutConfig, LayoutOptions, DEFAULT_SEPARATOR,
    MIN_COLUMN_WIDTH,
};
pub use util::{display_width, pad_left, pad_right, wrap};
