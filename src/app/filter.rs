//! Search filtering over option sets.
//!
//! Filtering is a pure function of the full option set and the current search
//! term. Matching is case-insensitive substring containment. Grouped sets are
//! filtered per group: a group survives when its name or any member matches,
//! and a surviving group keeps all of its members.

use crate::domain::{OptionGroup, OptionSet};

/// Filters `options` by `term`.
///
/// An empty term returns the option set unchanged.
///
/// # Example
///
/// ```rust
/// use zelect::app::filter::filter;
/// use zelect::domain::OptionSet;
///
/// let options = OptionSet::Flat(vec!["HTML".into(), "CSS".into(), "JS".into()]);
/// assert_eq!(filter(&options, "s"), OptionSet::Flat(vec!["CSS".into(), "JS".into()]));
/// ```
#[must_use]
pub fn filter(options: &OptionSet, term: &str) -> OptionSet {
    if term.is_empty() {
        return options.clone();
    }

    let needle = term.to_lowercase();

    match options {
        OptionSet::Flat(labels) => OptionSet::Flat(
            labels
                .iter()
                .filter(|label| contains_lowercase(label, &needle))
                .cloned()
                .collect(),
        ),
        OptionSet::Grouped(groups) => OptionSet::Grouped(
            groups
                .iter()
                .filter(|group| group_matches(group, &needle))
                .cloned()
                .collect(),
        ),
    }
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn group_matches(group: &OptionGroup, needle: &str) -> bool {
    contains_lowercase(&group.name, needle)
        || group
            .members
            .iter()
            .any(|member| contains_lowercase(member, needle))
}

/// Formats the result count shown in place of the placeholder while searching.
///
/// Singular for zero or one result, plural otherwise.
///
/// ```rust
/// use zelect::app::filter::result_label;
///
/// assert_eq!(result_label(0), "0 result");
/// assert_eq!(result_label(1), "1 result");
/// assert_eq!(result_label(3), "3 results");
/// ```
#[must_use]
pub fn result_label(count: usize) -> String {
    let suffix = if count > 1 { "s" } else { "" };
    format!("{count} result{suffix}")
}

/// Finds the first case-insensitive occurrence of `term` in `label`.
///
/// Returns a `(start, end)` range in character indices (exclusive end), or
/// `None` when the term is empty or absent. Characters are folded one at a
/// time, so the range always lines up with the characters of `label`.
#[must_use]
pub fn match_range(label: &str, term: &str) -> Option<(usize, usize)> {
    if term.is_empty() {
        return None;
    }

    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = label.chars().map(fold).collect();
    let needle: Vec<char> = term.chars().map(fold).collect();

    if needle.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| (start, start + needle.len()))
}
