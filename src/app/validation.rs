//! Validation guard turning raw options into a tagged option set.
//!
//! The guard runs once, before any state exists. It checks that the shape of
//! the host's options matches the declared [`SelectMode`] and produces the
//! [`OptionSet`] variant the rest of the crate relies on. A mismatch is an
//! integration mistake and aborts construction with
//! [`ZelectError::Configuration`].

use super::modes::SelectMode;
use crate::domain::{OptionGroup, OptionSet, RawOption, Result, ZelectError};

/// Validates `options` against `mode` and returns the tagged option set.
///
/// # Errors
///
/// Returns [`ZelectError::Configuration`] when:
/// - `mode` is grouped and every element is a scalar (including an empty list)
/// - `mode` is grouped and scalars are mixed with groups
/// - `mode` is single or multi and any element is a group
///
/// # Example
///
/// ```rust
/// use zelect::app::{modes::SelectMode, validation::validate};
/// use zelect::domain::{OptionSet, RawOption};
///
/// let raw = vec![RawOption::from("a"), RawOption::from("b")];
/// assert_eq!(
///     validate(SelectMode::Multi, &raw).unwrap(),
///     OptionSet::Flat(vec!["a".into(), "b".into()]),
/// );
/// assert!(validate(SelectMode::Grouped, &raw).is_err());
/// ```
pub fn validate(mode: SelectMode, options: &[RawOption]) -> Result<OptionSet> {
    let scalar_count = options.iter().filter(|option| option.is_scalar()).count();

    tracing::debug!(
        mode = ?mode,
        option_count = options.len(),
        scalar_count = scalar_count,
        "validating options"
    );

    match mode {
        SelectMode::Grouped => {
            if scalar_count == options.len() {
                return Err(ZelectError::Configuration(
                    "grouped select needs a list of {group, options} objects, got plain labels"
                        .to_string(),
                ));
            }
            if scalar_count > 0 {
                return Err(ZelectError::Configuration(format!(
                    "grouped select cannot mix plain labels with groups ({scalar_count} plain labels found)"
                )));
            }

            let groups: Vec<OptionGroup> = options
                .iter()
                .filter_map(|option| match option {
                    RawOption::Group(group) => Some(group.clone()),
                    RawOption::Text(_) | RawOption::Number(_) => None,
                })
                .collect();
            Ok(OptionSet::Grouped(groups))
        }
        SelectMode::Single | SelectMode::Multi => {
            if scalar_count != options.len() {
                let kind = if mode == SelectMode::Multi {
                    "multi select"
                } else {
                    "single select"
                };
                return Err(ZelectError::Configuration(format!(
                    "{kind} needs a flat list of labels, got grouped options"
                )));
            }

            Ok(OptionSet::Flat(
                options.iter().filter_map(RawOption::label).collect(),
            ))
        }
    }
}
