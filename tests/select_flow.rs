use std::cell::RefCell;
use std::rc::Rc;

use zelect::app::filter::{filter, result_label};
use zelect::ui::HitTarget;
use zelect::{Event, OptionGroup, OptionSet, RawOption, Select, ZelectError};

/// Clicks the first region bound to `target` in a fresh 24×40 frame.
fn click(select: &mut Select, target: &HitTarget) -> bool {
    let frame = select.frame(24, 40);
    let region = frame
        .region_for(target)
        .unwrap_or_else(|| panic!("{target:?} is not on screen"));
    let event = frame
        .event_at(region.line, region.columns.start)
        .expect("region resolves to an event");
    select.dispatch(&event)
}

fn option(label: &str) -> HitTarget {
    HitTarget::Option(label.to_string())
}

fn stack() -> Vec<RawOption> {
    vec![
        OptionGroup::new(
            "frontend",
            vec!["React.JS".into(), "Next.JS".into(), "TypeScript".into()],
        )
        .into(),
        OptionGroup::new(
            "backend",
            vec!["Node.JS".into(), "Express.JS".into(), "Mongoose".into()],
        )
        .into(),
    ]
}

// ============================================================================
// Searchable single select
// ============================================================================

#[test]
fn test_search_html_css_js() {
    let mut select = Select::builder(["HTML", "CSS", "JS"])
        .searchable(true)
        .build()
        .unwrap();

    click(&mut select, &HitTarget::Control);
    select.dispatch(&Event::SearchChanged("h".into()));

    let state = select.state();
    assert_eq!(state.filtered_options(), OptionSet::Flat(vec!["HTML".into()]));
    assert_eq!(state.compute_viewmodel().control.text, "1 result");

    select.dispatch(&Event::SearchChanged("s".into()));
    assert_eq!(
        select.state().filtered_options(),
        OptionSet::Flat(vec!["CSS".into(), "JS".into()])
    );
    assert_eq!(select.state().compute_viewmodel().control.text, "2 results");
}

#[test]
fn test_select_then_query() {
    let terms = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&terms);

    let mut select = Select::builder(["HTML", "CSS", "JS"])
        .searchable(true)
        .on_search(move |term| sink.borrow_mut().push(term.to_string()))
        .build()
        .unwrap();

    click(&mut select, &HitTarget::Control);
    select.dispatch(&Event::SearchChanged("c".into()));
    click(&mut select, &option("CSS"));

    assert_eq!(select.value(), Some("CSS"));
    assert!(select.state().search_term.is_empty());
    assert_eq!(*terms.borrow(), vec!["c"]);

    let lines = select.frame(24, 40).plain_lines();
    assert!(lines[1].contains("CSS"));
    assert!(lines.iter().any(|line| line.trim_start() == "✓ CSS"));
}

#[test]
fn test_result_label_pluralization() {
    assert_eq!(result_label(0), "0 result");
    assert_eq!(result_label(1), "1 result");
    assert_eq!(result_label(2), "2 results");
}

// ============================================================================
// Grouped select
// ============================================================================

#[test]
fn test_grouped_filter_keeps_whole_group() {
    let set = OptionSet::Grouped(
        stack()
            .into_iter()
            .filter_map(|raw| match raw {
                RawOption::Group(group) => Some(group),
                _ => None,
            })
            .collect(),
    );

    let OptionSet::Grouped(groups) = filter(&set, "type") else {
        panic!("grouped input must stay grouped");
    };
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].members, vec!["React.JS", "Next.JS", "TypeScript"]);
}

#[test]
fn test_grouped_click_selects_member() {
    let mut select = Select::builder(stack())
        .grouped(true)
        .searchable(true)
        .build()
        .unwrap();

    click(&mut select, &HitTarget::Control);
    select.dispatch(&Event::SearchChanged("mongo".into()));

    let lines = select.frame(24, 40).plain_lines();
    assert!(lines.iter().any(|line| line.trim() == "BACKEND"));
    assert!(!lines.iter().any(|line| line.trim() == "FRONTEND"));
    assert!(lines[1].contains("3 results"));

    click(&mut select, &option("Express.JS"));
    assert_eq!(select.value(), Some("Express.JS"));
}

#[test]
fn test_grouped_mode_rejects_flat_options() {
    let err = Select::builder(["HTML", "CSS"])
        .grouped(true)
        .build()
        .unwrap_err();
    assert!(matches!(err, ZelectError::Configuration(_)));
}

// ============================================================================
// Multi select
// ============================================================================

#[test]
fn test_multi_add_reclick_and_clear_item() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);

    let mut select = Select::builder(["HTML", "CSS", "JS"])
        .multi(true)
        .clearable(true)
        .on_selection_change(move |values| sink.borrow_mut().push(values.to_vec()))
        .build()
        .unwrap();

    click(&mut select, &HitTarget::Control);
    click(&mut select, &option("HTML"));
    click(&mut select, &option("JS"));
    click(&mut select, &option("HTML"));

    assert_eq!(select.selected(), vec!["HTML", "JS"]);
    assert!(select.frame(24, 40).plain_lines()[1].contains("HTML, JS"));

    click(&mut select, &HitTarget::ClearItem("HTML".into()));
    assert_eq!(select.selected(), vec!["JS"]);

    assert_eq!(
        *changes.borrow(),
        vec![
            vec!["HTML".to_string()],
            vec!["HTML".to_string(), "JS".to_string()],
            vec!["JS".to_string()],
        ]
    );
}

#[test]
fn test_multi_clear_all() {
    let mut select = Select::builder(["HTML", "CSS"])
        .multi(true)
        .clearable(true)
        .build()
        .unwrap();

    assert!(select.frame(24, 40).region_for(&HitTarget::ClearAll).is_none());

    click(&mut select, &HitTarget::Control);
    click(&mut select, &option("CSS"));
    click(&mut select, &HitTarget::ClearAll);

    assert!(select.selected().is_empty());
    assert!(select.frame(24, 40).plain_lines()[1].contains("Select Option"));
}

#[test]
fn test_multi_mode_rejects_groups() {
    assert!(Select::builder(stack()).multi(true).build().is_err());
}

// ============================================================================
// Clear and disabled affordances
// ============================================================================

#[test]
fn test_single_clear_all_resets_to_placeholder() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);

    let mut select = Select::builder(["HTML", "CSS"])
        .placeholder("Pick a language")
        .value("CSS")
        .clearable(true)
        .on_change(move |value| sink.borrow_mut().push(value.map(str::to_string)))
        .build()
        .unwrap();

    click(&mut select, &HitTarget::ClearAll);
    assert_eq!(*changes.borrow(), vec![None]);

    select.sync_value(None);
    let frame = select.frame(24, 40);
    assert!(frame.plain_lines()[1].contains("Pick a language"));
    assert!(frame.region_for(&HitTarget::ClearAll).is_none());
}

#[test]
fn test_disabled_clearable_renders_no_clear_control() {
    let mut select = Select::builder(["HTML"])
        .value("HTML")
        .clearable(true)
        .disabled(true)
        .build()
        .unwrap();

    let frame = select.frame(24, 40);
    assert!(!frame.plain_lines()[1].contains('✕'));
    assert_eq!(frame.hit_test(1, 5), None);

    assert!(!select.dispatch(&Event::ActivateControl));
    assert!(!select.dispatch(&Event::ClearAll));
    assert_eq!(select.value(), Some("HTML"));
    assert_eq!(select.frame(24, 40).lines().len(), 3);
}
