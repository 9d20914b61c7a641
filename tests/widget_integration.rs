// SPDX-License-Identifier: MPL-2.0
//! Integration tests exercising the widget cores end-to-end: the sidebar's
//! nested-menu interaction model and the toast timing state machine.

use iced_gallery::ui::notifications::{Manager, Notification, Phase, EXIT_TRANSITION};
use iced_gallery::ui::scroll_lock;
use iced_gallery::ui::sidebar::{flatten_visible, Event, MenuNode, State};
use std::time::Duration;

fn showcase_items() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf("1", "Home").with_target("/"),
        MenuNode::leaf("2", "Products")
            .with_children(vec![MenuNode::leaf("2-1", "A").with_target("/a")]),
    ]
}

fn visible_ids(items: &[MenuNode], state: &State) -> Vec<String> {
    flatten_visible(items, state.expanded())
        .iter()
        .map(|row| row.node.id.clone())
        .collect()
}

#[test]
fn menu_walkthrough_matches_the_documented_scenario() {
    let items = showcase_items();
    let mut state = State::new();

    // Activate the "Products" branch: it expands in place
    let event = state.activate(&items[1]);
    assert!(matches!(event, Event::None));
    assert!(state.is_expanded("2"));
    assert_eq!(visible_ids(&items, &state), vec!["1", "2", "2-1"]);

    // Activate it again: the pair of activations is idempotent
    let event = state.activate(&items[1]);
    assert!(matches!(event, Event::None));
    assert_eq!(visible_ids(&items, &state), vec!["1", "2"]);

    // Activate "Home": navigation fires exactly once, toward "/"
    match state.activate(&items[0]) {
        Event::Navigated { target } => assert_eq!(target, "/"),
        other => panic!("expected navigation, got {:?}", other),
    }
}

#[test]
fn nested_leaf_navigates_to_its_own_target() {
    let items = showcase_items();
    let mut state = State::new();

    state.activate(&items[1]);
    let rows = flatten_visible(&items, state.expanded());
    let nested = rows
        .iter()
        .find(|row| row.node.id == "2-1")
        .expect("expanded child should be visible")
        .node
        .clone();

    match state.activate(&nested) {
        Event::Navigated { target } => assert_eq!(target, "/a"),
        other => panic!("expected navigation, got {:?}", other),
    }
}

#[test]
fn toast_lives_through_its_full_timeline() {
    let mut manager = Manager::new();
    let toast = Notification::info("five seconds").with_duration(Duration::from_millis(5000));
    let id = toast.id();
    let shown = toast.shown_at().expect("visible toast has a display clock");
    manager.push(toast);

    // Nothing happens while the auto-dismiss wait runs
    assert!(manager.tick(shown + Duration::from_millis(4900)).is_empty());
    assert_eq!(manager.visible().next().unwrap().phase(), Phase::Visible);

    // The timer fires: the toast starts exiting but is still rendered
    assert!(manager.tick(shown + Duration::from_millis(5000)).is_empty());
    assert_eq!(manager.visible().next().unwrap().phase(), Phase::Exiting);

    // After the exit transition it is removed, and reported exactly once
    let closed = manager.tick(shown + Duration::from_millis(5000) + EXIT_TRANSITION);
    assert_eq!(closed, vec![id]);
    assert_eq!(manager.visible_count(), 0);
    assert!(manager
        .tick(shown + Duration::from_millis(10_000))
        .is_empty());
}

#[test]
fn destroyed_toast_never_reports_back() {
    let mut manager = Manager::new();
    let toast = Notification::info("doomed").with_duration(Duration::from_millis(5000));
    let id = toast.id();
    let shown = toast.shown_at().unwrap();
    manager.push(toast);

    // Torn down before the auto-dismiss fires
    assert!(manager.remove(id, shown + Duration::from_millis(1000)));

    // Even well past every deadline, nothing is reported
    assert!(manager.tick(shown + Duration::from_secs(60)).is_empty());
}

#[test]
fn pinned_toast_outlives_every_tick() {
    let mut manager = Manager::new();
    let toast = Notification::error("pinned").with_duration(Duration::ZERO);
    let shown = toast.shown_at().unwrap();
    manager.push(toast);

    for minutes in 1..=10 {
        assert!(manager
            .tick(shown + Duration::from_secs(minutes * 60))
            .is_empty());
    }
    assert_eq!(manager.visible_count(), 1);
}

#[test]
fn scroll_suppression_is_reference_counted_across_panels() {
    let mut first = State::new();
    let mut second = State::new();

    first.set_open(true);
    second.set_open(true);
    assert!(scroll_lock::is_locked());

    // One panel closes: the other still suppresses scrolling
    first.set_open(false);
    assert!(scroll_lock::is_locked());

    // Dropping an open panel releases its share as well
    drop(second);
    assert!(!scroll_lock::is_locked());
}
