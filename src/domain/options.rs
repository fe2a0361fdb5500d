//! Option model for the select widget.
//!
//! Options reach the widget in two shapes. Hosts hand over an untyped list of
//! [`RawOption`] values (usually deserialized from JSON configuration), and the
//! validation guard turns that list into a tagged [`OptionSet`] exactly once.
//! Everything downstream of construction works with the tagged form and never
//! re-inspects element shapes.

use serde::{Deserialize, Serialize};

/// A named group of option labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Group header text. Need not be unique.
    #[serde(rename = "group")]
    pub name: String,

    /// Ordered member labels. May repeat labels from other groups.
    #[serde(rename = "options")]
    pub members: Vec<String>,
}

impl OptionGroup {
    #[must_use]
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

/// An untyped option element as supplied by the host.
///
/// Deserializes from any of:
///
/// ```json
/// "HTML"
/// 42
/// { "group": "frontend", "options": ["React.JS", "Next.JS"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOption {
    /// A plain text label.
    Text(String),
    /// A numeric label, displayed using its decimal text.
    Number(serde_json::Number),
    /// A named group of labels.
    Group(OptionGroup),
}

impl RawOption {
    /// Returns `true` for text and numeric elements.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Number(_))
    }

    /// Returns the label of a scalar element, `None` for groups.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(number.to_string()),
            Self::Group(_) => None,
        }
    }
}

impl From<&str> for RawOption {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawOption {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<OptionGroup> for RawOption {
    fn from(value: OptionGroup) -> Self {
        Self::Group(value)
    }
}

/// A validated option set, either flat or grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSet {
    /// Ordered plain labels with no grouping.
    Flat(Vec<String>),
    /// Ordered named groups of labels.
    Grouped(Vec<OptionGroup>),
}

impl OptionSet {
    /// Iterates every label in display order, flattening groups.
    pub fn labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Flat(labels) => Box::new(labels.iter().map(String::as_str)),
            Self::Grouped(groups) => Box::new(
                groups
                    .iter()
                    .flat_map(|group| group.members.iter().map(String::as_str)),
            ),
        }
    }

    /// Number of selectable labels. Group headers are not counted.
    #[must_use]
    pub fn option_count(&self) -> usize {
        match self {
            Self::Flat(labels) => labels.len(),
            Self::Grouped(groups) => groups.iter().map(|group| group.members.len()).sum(),
        }
    }

    /// Returns `true` if `label` is one of the selectable labels (exact match).
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels().any(|candidate| candidate == label)
    }
}

/// Parses the `options` configuration string into raw option elements.
///
/// Strings starting with `[` are read as a JSON array. Anything else is a
/// comma-separated list of labels; surrounding whitespace is trimmed and empty
/// entries are dropped.
///
/// # Errors
///
/// Returns [`ZelectError::Options`](crate::ZelectError::Options) if the JSON
/// array cannot be parsed.
///
/// # Example
///
/// ```rust
/// use zelect::domain::options::{parse_options, RawOption};
///
/// let flat = parse_options("HTML, CSS ,JS").unwrap();
/// assert_eq!(flat, vec![RawOption::from("HTML"), "CSS".into(), "JS".into()]);
///
/// let grouped = parse_options(r#"[{"group":"g","options":["a"]}]"#).unwrap();
/// assert!(!grouped[0].is_scalar());
/// ```
pub fn parse_options(input: &str) -> crate::Result<Vec<RawOption>> {
    let trimmed = input.trim();

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|e| crate::ZelectError::Options(format!("invalid options JSON: {e}")));
    }

    Ok(trimmed
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(RawOption::from)
        .collect())
}
