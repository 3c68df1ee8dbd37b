//! Core types for column layout configuration.
//!
//! This module defines per-column sizing policies ([`ColumnSpec`]), the
//! layout-wide options ([`LayoutOptions`]), and the two ways of supplying
//! them: a static value or a function of the terminal width
//! ([`LayoutConfig`], [`Breakpoints`]).

use std::borrow::Cow;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ColumnsError, Result};

/// Separator placed between adjacent columns unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = "  ";

/// Smallest width a flexible column may be given.
pub const MIN_COLUMN_WIDTH: usize = 1;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

/// Sizing policy for a single column.
///
/// A spec without `width` is flexible ("auto"): it starts at its content
/// width, clamped to `min_width..=max_width`, and may shrink toward
/// `min_width` when the terminal is too narrow. A spec with `width` is fixed
/// and never resized.
///
/// ```rust
/// use terminal_columns::ColumnSpec;
///
/// let id = ColumnSpec::fixed(8);
/// let name = ColumnSpec::auto().min_width(10).max_width(40);
/// let size = ColumnSpec::auto().right();
/// # let _ = (id, name, size);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    /// Fixed width in display columns. `None` means flexible.
    #[serde(
        deserialize_with = "deserialize_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<usize>,
    /// Lower bound for a flexible column (defaults to 1).
    #[serde(alias = "minWidth", skip_serializing_if = "Option::is_none")]
    pub min_width: Option<usize>,
    /// Upper bound for a flexible column (unbounded if not set).
    #[serde(alias = "maxWidth", skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
    /// Alignment of text inside the column.
    pub align: Align,
}

impl ColumnSpec {
    /// A flexible column with no bounds.
    pub fn auto() -> Self {
        ColumnSpec::default()
    }

    /// A column with a fixed width.
    pub fn fixed(width: usize) -> Self {
        ColumnSpec {
            width: Some(width),
            ..Default::default()
        }
    }

    /// Set the minimum width.
    pub fn min_width(mut self, min: usize) -> Self {
        self.min_width = Some(min);
        self
    }

    /// Set the maximum width.
    pub fn max_width(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }

    /// Set the text alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Right-align text (shorthand for `.align(Align::Right)`).
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// True when the column has an explicit width.
    pub fn is_fixed(&self) -> bool {
        self.width.is_some()
    }

    /// The floor a flexible column can shrink to.
    pub fn floor(&self) -> usize {
        self.min_width.unwrap_or(MIN_COLUMN_WIDTH).max(MIN_COLUMN_WIDTH)
    }

    /// The ceiling a flexible column can start at.
    pub fn ceiling(&self) -> usize {
        self.max_width.unwrap_or(usize::MAX)
    }

    /// Check the spec for the column at `index`.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.width == Some(0) {
            return Err(ColumnsError::ZeroWidth { column: index });
        }
        if let Some(max) = self.max_width {
            let min = self.floor();
            if min > max {
                return Err(ColumnsError::InvalidBounds {
                    column: index,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Accepts either a number or the keyword `auto` for `width`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WidthRaw {
    Fixed(usize),
    Keyword(String),
}

fn deserialize_width<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<WidthRaw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(WidthRaw::Fixed(w)) => Ok(Some(w)),
        Some(WidthRaw::Keyword(s)) if s == "auto" => Ok(None),
        Some(WidthRaw::Keyword(s)) => Err(D::Error::custom(format!(
            "invalid width '{}': expected a number or 'auto'",
            s
        ))),
    }
}

/// Layout-wide options: column specs and the separator between columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Per-column specs, by index. Columns beyond this list are flexible.
    pub columns: Vec<ColumnSpec>,
    /// String placed between adjacent columns.
    pub separator: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            columns: Vec::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Config text may hold full options or just the column list.
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionsRaw {
    Columns(Vec<ColumnSpec>),
    Full(LayoutOptions),
}

impl From<OptionsRaw> for LayoutOptions {
    fn from(raw: OptionsRaw) -> Self {
        match raw {
            OptionsRaw::Columns(columns) => LayoutOptions::new(columns),
            OptionsRaw::Full(options) => options,
        }
    }
}

impl LayoutOptions {
    /// Options with the given column specs and the default separator.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        LayoutOptions {
            columns,
            ..Default::default()
        }
    }

    /// Set the column separator.
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.separator = sep.into();
        self
    }

    /// Append a column spec.
    pub fn column(mut self, spec: ColumnSpec) -> Self {
        self.columns.push(spec);
        self
    }

    /// Spec for the column at `index`, if one was given.
    pub fn spec(&self, index: usize) -> Option<&ColumnSpec> {
        self.columns.get(index)
    }

    /// Parse options from YAML.
    ///
    /// Either a mapping with `columns` and `separator` keys or a bare list of
    /// column specs is accepted.
    ///
    /// ```rust
    /// use terminal_columns::LayoutOptions;
    ///
    /// let options = LayoutOptions::from_yaml(r#"
    /// separator: " | "
    /// columns:
    ///   - width: 6
    ///   - minWidth: 10
    ///     align: right
    /// "#).unwrap();
    ///
    /// assert_eq!(options.separator, " | ");
    /// assert_eq!(options.columns[0].width, Some(6));
    /// assert_eq!(options.columns[1].min_width, Some(10));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: OptionsRaw = serde_yaml::from_str(yaml)?;
        Ok(raw.into())
    }

    /// Parse options from JSON. Accepts the same shapes as [`from_yaml`](Self::from_yaml).
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: OptionsRaw = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

impl From<Vec<ColumnSpec>> for LayoutOptions {
    fn from(columns: Vec<ColumnSpec>) -> Self {
        LayoutOptions::new(columns)
    }
}

/// Options picked by the largest terminal-width threshold that fits.
///
/// ```rust
/// use terminal_columns::{Breakpoints, ColumnSpec, LayoutOptions};
///
/// let breakpoints = Breakpoints::new()
///     .at(100, vec![ColumnSpec::fixed(20), ColumnSpec::auto()])
///     .at(60, vec![ColumnSpec::fixed(10), ColumnSpec::auto()])
///     .otherwise(LayoutOptions::default().separator(" "));
///
/// assert_eq!(breakpoints.select(120).columns[0].width, Some(20));
/// assert_eq!(breakpoints.select(80).columns[0].width, Some(10));
/// assert_eq!(breakpoints.select(40).separator, " ");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Breakpoints {
    /// Thresholds in descending order.
    points: Vec<(usize, LayoutOptions)>,
    fallback: LayoutOptions,
}

impl Breakpoints {
    /// Empty breakpoints that always select the default options.
    pub fn new() -> Self {
        Breakpoints::default()
    }

    /// Use `options` when the terminal is at least `min_width` wide.
    pub fn at(mut self, min_width: usize, options: impl Into<LayoutOptions>) -> Self {
        self.points.push((min_width, options.into()));
        self.points.sort_by(|a, b| b.0.cmp(&a.0));
        self
    }

    /// Options used when no threshold matches.
    pub fn otherwise(mut self, options: impl Into<LayoutOptions>) -> Self {
        self.fallback = options.into();
        self
    }

    /// Options for the given terminal width.
    pub fn select(&self, terminal_width: usize) -> &LayoutOptions {
        self.points
            .iter()
            .find(|(min_width, _)| terminal_width >= *min_width)
            .map(|(_, options)| options)
            .unwrap_or(&self.fallback)
    }
}

/// Layout options, either fixed or computed from the terminal width.
///
/// Anything convertible into [`LayoutOptions`] converts into a static
/// config, so a bare `Vec<ColumnSpec>` works as shorthand.
pub enum LayoutConfig {
    /// The same options at every terminal width.
    Static(LayoutOptions),
    /// Options computed from the terminal width.
    Responsive(Box<dyn Fn(usize) -> LayoutOptions + Send + Sync>),
}

impl LayoutConfig {
    /// Config computed from the terminal width.
    ///
    /// ```rust
    /// use terminal_columns::{ColumnSpec, LayoutConfig, LayoutOptions};
    ///
    /// let config = LayoutConfig::responsive(|width| {
    ///     LayoutOptions::new(vec![ColumnSpec::fixed(width / 4)])
    /// });
    /// assert_eq!(config.options_for(80).columns[0].width, Some(20));
    /// ```
    pub fn responsive<F>(f: F) -> Self
    where
        F: Fn(usize) -> LayoutOptions + Send + Sync + 'static,
    {
        LayoutConfig::Responsive(Box::new(f))
    }

    /// Options to use at the given terminal width.
    pub fn options_for(&self, terminal_width: usize) -> Cow<'_, LayoutOptions> {
        match self {
            LayoutConfig::Static(options) => Cow::Borrowed(options),
            LayoutConfig::Responsive(f) => Cow::Owned(f(terminal_width)),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig::Static(LayoutOptions::default())
    }
}

impl fmt::Debug for LayoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutConfig::Static(options) => f.debug_tuple("Static").field(options).finish(),
            LayoutConfig::Responsive(_) => f.write_str("Responsive(..)"),
        }
    }
}

impl From<LayoutOptions> for LayoutConfig {
    fn from(options: LayoutOptions) -> Self {
        LayoutConfig::Static(options)
    }
}

impl From<Vec<ColumnSpec>> for LayoutConfig {
    fn from(columns: Vec<ColumnSpec>) -> Self {
        LayoutConfig::Static(LayoutOptions::new(columns))
    }
}

impl From<Breakpoints> for LayoutConfig {
    fn from(breakpoints: Breakpoints) -> Self {
        LayoutConfig::responsive(move |width| breakpoints.select(width).clone())
    }
}
