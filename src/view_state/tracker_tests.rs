//! Tests for ViewportTracker.

use super::*;
use crate::view_state::test_support::RecordingHost;
use crate::view_state::types::Extent;

fn two_screens() -> Vec<(SectionId, Extent)> {
    vec![
        (SectionId::About, Extent::new(0, 800)),
        (SectionId::Experience, Extent::new(800, 800)),
    ]
}

fn tracker_for(layout: &[(SectionId, Extent)]) -> ViewportTracker {
    let mut tracker = ViewportTracker::new(SectionRegistry::all(), NavBar::new(64, 768));
    tracker.refresh(layout);
    tracker
}

// ===== on_scroll =====

#[test]
fn midpoint_in_first_section_activates_index_zero() {
    let mut tracker = tracker_for(&two_screens());
    let host = RecordingHost::new(1024, 800).at(0);

    tracker.on_scroll(&host);
    assert_eq!(tracker.active_index(), 0);
}

#[test]
fn midpoint_in_second_section_activates_index_one() {
    let mut tracker = tracker_for(&two_screens());
    let host = RecordingHost::new(1024, 800).at(800);

    assert!(tracker.on_scroll(&host));
    assert_eq!(tracker.active_index(), 1);
    assert_eq!(tracker.active_section(), Some(SectionId::Experience));
}

#[test]
fn boundary_row_belongs_to_lower_section() {
    let mut tracker = tracker_for(&two_screens());
    // midpoint = 400 + 400 = 800 = top of Experience
    let host = RecordingHost::new(1024, 800).at(400);

    tracker.on_scroll(&host);
    assert_eq!(tracker.active_index(), 1);
}

#[test]
fn midpoint_past_last_section_keeps_previous_index() {
    let mut tracker = tracker_for(&two_screens());
    tracker.on_scroll(&RecordingHost::new(1024, 800).at(800));
    assert_eq!(tracker.active_index(), 1);

    // midpoint 2000 is beyond every section (footer territory)
    assert!(!tracker.on_scroll(&RecordingHost::new(1024, 800).at(1600)));
    assert_eq!(tracker.active_index(), 1);
}

#[test]
fn midpoint_in_gap_keeps_previous_index() {
    let layout = vec![
        (SectionId::About, Extent::new(0, 10)),
        (SectionId::Experience, Extent::new(20, 10)),
    ];
    let mut tracker = tracker_for(&layout);
    tracker.on_scroll(&RecordingHost::new(80, 10).at(20));
    assert_eq!(tracker.active_index(), 1);

    // midpoint 15 falls in the gap
    tracker.on_scroll(&RecordingHost::new(80, 10).at(10));
    assert_eq!(tracker.active_index(), 1);
}

#[test]
fn empty_registry_keeps_default_index() {
    let mut tracker = ViewportTracker::new(SectionRegistry::all(), NavBar::default());
    tracker.on_scroll(&RecordingHost::new(80, 24).at(500));
    assert_eq!(tracker.active_index(), 0);
    assert_eq!(tracker.active_section(), None);
}

// ===== on_pointer_move =====

#[test]
fn pointer_move_records_last_position() {
    let mut tracker = tracker_for(&two_screens());
    tracker.on_pointer_move(10, 4);
    tracker.on_pointer_move(3, 7);
    assert_eq!(tracker.pointer(), PointerPosition::new(3, 7));
}

// ===== scroll_to_section =====

#[test]
fn scroll_to_section_subtracts_nav_height_on_wide_viewport() {
    let tracker = tracker_for(&two_screens());
    let mut host = RecordingHost::new(1024, 800);

    assert!(tracker.scroll_to_section(1, &mut host));
    assert_eq!(host.commands, vec![800 - 64]);
}

#[test]
fn scroll_to_section_has_no_offset_on_narrow_viewport() {
    let tracker = tracker_for(&two_screens());
    let mut host = RecordingHost::new(500, 800);

    tracker.scroll_to_section(1, &mut host);
    assert_eq!(host.commands, vec![800]);
}

#[test]
fn scroll_to_first_section_saturates_at_zero() {
    let tracker = tracker_for(&two_screens());
    let mut host = RecordingHost::new(1024, 800);

    tracker.scroll_to_section(0, &mut host);
    assert_eq!(host.commands, vec![0]);
}

#[test]
fn scroll_to_out_of_range_index_issues_nothing() {
    let tracker = tracker_for(&two_screens());
    let mut host = RecordingHost::new(1024, 800);

    assert!(!tracker.scroll_to_section(2, &mut host));
    assert!(!tracker.scroll_to_section(usize::MAX, &mut host));
    assert!(host.commands.is_empty());
}

#[test]
fn scroll_to_unmeasured_section_id_issues_nothing() {
    let tracker = tracker_for(&two_screens());
    let mut host = RecordingHost::new(1024, 800);

    assert!(!tracker.scroll_to_section_id(SectionId::Skills, &mut host));
    assert!(host.commands.is_empty());
}

#[test]
fn scroll_to_section_id_resolves_registry_index() {
    let tracker = tracker_for(&two_screens());
    let mut host = RecordingHost::new(500, 800);

    assert!(tracker.scroll_to_section_id(SectionId::Experience, &mut host));
    assert_eq!(host.commands, vec![800]);
}

// ===== next/previous =====

#[test]
fn next_section_from_first_targets_second() {
    let tracker = tracker_for(&two_screens());
    let mut host = RecordingHost::new(500, 800);

    assert!(tracker.next_section(&mut host));
    assert_eq!(host.commands, vec![800]);
}

#[test]
fn next_section_on_last_is_noop() {
    let mut tracker = tracker_for(&two_screens());
    tracker.on_scroll(&RecordingHost::new(500, 800).at(800));
    let mut host = RecordingHost::new(500, 800);

    assert!(!tracker.next_section(&mut host));
    assert!(host.commands.is_empty());
}

#[test]
fn previous_section_on_first_is_noop() {
    let tracker = tracker_for(&two_screens());
    let mut host = RecordingHost::new(500, 800);

    assert!(!tracker.previous_section(&mut host));
    assert!(host.commands.is_empty());
}

// ===== NavBar =====

#[test]
fn nav_bar_hidden_below_narrow_width() {
    let nav = NavBar::new(1, 80);
    assert_eq!(nav.height_for(Viewport::new(79, 24)), 0);
    assert_eq!(nav.height_for(Viewport::new(80, 24)), 1);
}
