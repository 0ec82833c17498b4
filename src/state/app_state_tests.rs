//! Tests for AppState transitions.

use super::*;
use crate::view_state::{CardId, Extent, PageLayout};
use std::time::Duration;

fn options(smooth_scroll: bool) -> StateOptions {
    StateOptions {
        mount: MountOptions {
            reveal_delay: Duration::from_millis(100),
            reveal_interval: Duration::from_millis(10),
            reveal_threshold: 4,
            nav_bar: NavBar::new(1, 80),
        },
        smooth_scroll,
        pointer_parallax: true,
    }
}

fn mounted(smooth_scroll: bool) -> (AppState, Instant) {
    let start = Instant::now();
    let mut state = AppState::new(
        Portfolio::default(),
        Viewport::new(100, 30),
        options(smooth_scroll),
    );
    state.mount(start);
    (state, start)
}

fn section_extent(state: &AppState, id: SectionId) -> Extent {
    state
        .document()
        .sections()
        .iter()
        .find(|(s, _)| *s == id)
        .map(|(_, e)| *e)
        .expect("section laid out")
}

// ===== Mount lifecycle =====

#[test]
fn new_state_is_unmounted_and_has_no_listeners() {
    let state = AppState::new(Portfolio::default(), Viewport::new(100, 30), options(true));
    assert!(!state.is_mounted());
    assert_eq!(state.listeners().listener_count(), 0);
    assert_eq!(state.active_section(), None);
}

#[test]
fn mount_registers_listeners_and_activates_first_section() {
    let (state, _) = mounted(true);
    assert!(state.is_mounted());
    assert_eq!(state.listeners().listener_count(), 3);
    assert_eq!(state.active_section(), Some(SectionId::About));
}

#[test]
fn remount_does_not_leak_listeners() {
    let (mut state, start) = mounted(true);
    state.mount(start);
    assert_eq!(state.listeners().listener_count(), 3);
}

#[test]
fn unmount_removes_listeners_and_stops_observations() {
    let (mut state, start) = mounted(false);
    state.unmount();
    assert_eq!(state.listeners().listener_count(), 0);

    assert!(!state.observe(Observation::PointerMove { x: 3, y: 4 }));
    assert!(!state.tick(start + Duration::from_secs(10)));
    assert!(!state.scroll_to_section(2));
    assert!(state.view().is_none());
}

// ===== Scrolling =====

#[test]
fn scroll_by_updates_active_section() {
    let (mut state, _) = mounted(false);
    let experience = section_extent(&state, SectionId::Experience);

    assert!(state.scroll_to(experience.top));
    assert_eq!(state.active_section(), Some(SectionId::Experience));

    assert!(state.scroll_by(-(experience.top as i32)));
    assert_eq!(state.active_section(), Some(SectionId::About));
}

#[test]
fn scroll_past_the_end_is_clamped() {
    let (mut state, _) = mounted(false);
    state.scroll_to(u32::MAX);
    assert_eq!(state.scroller().scroll_offset(), state.scroller().max_offset());
    assert!(!state.scroll_by(10));
}

#[test]
fn instant_section_jump_subtracts_nav_bar() {
    let (mut state, _) = mounted(false);
    let projects = section_extent(&state, SectionId::Projects);

    assert!(state.scroll_to_section(2));
    assert_eq!(state.scroller().scroll_offset(), projects.top - 1);
    assert_eq!(state.active_section(), Some(SectionId::Projects));
}

#[test]
fn out_of_range_section_jump_is_a_no_op() {
    let (mut state, _) = mounted(false);
    assert!(!state.scroll_to_section(5));
    assert_eq!(state.scroller().scroll_offset(), 0);
}

#[test]
fn smooth_section_jump_animates_through_ticks() {
    let (mut state, start) = mounted(true);
    let education = section_extent(&state, SectionId::Education);

    assert!(state.scroll_to_section_id(SectionId::Education));
    assert_eq!(state.scroller().scroll_offset(), 0);
    assert!(state.is_animating());

    let mut frames = 0;
    while state.scroller().is_animating() {
        state.tick(start + Duration::from_millis(frames));
        frames += 1;
        assert!(frames < 200, "Smooth scroll never settled");
    }

    assert_eq!(state.scroller().scroll_offset(), education.top - 1);
    assert_eq!(state.active_section(), Some(SectionId::Education));
}

#[test]
fn next_and_previous_follow_the_active_section() {
    let (mut state, _) = mounted(false);

    assert!(!state.previous_section());
    assert!(state.next_section());
    assert_eq!(state.active_section(), Some(SectionId::Experience));
    assert!(state.previous_section());
    assert_eq!(state.active_section(), Some(SectionId::About));
}

#[test]
fn scrolling_reveals_cards() {
    let (mut state, _) = mounted(false);
    let first_job = CardId::new(SectionId::Experience, 0);
    let view = state.view().expect("mounted");
    assert!(!view.reveal().contains(first_job));

    state.scroll_to_section_id(SectionId::Experience);
    let view = state.view().expect("mounted");
    assert!(view.reveal().contains(first_job));
    assert!(state.document().cards().iter().any(|(id, _)| *id == first_job));
}

// ===== Resize =====

#[test]
fn relayout_keeps_offset_in_range_and_reobserves() {
    let (mut state, _) = mounted(false);
    state.scroll_to(u32::MAX);

    state.relayout(Viewport::new(200, 60));
    assert!(state.scroller().scroll_offset() <= state.scroller().max_offset());
    assert_eq!(state.document().viewport(), Viewport::new(200, 60));
    assert_eq!(state.listeners().listener_count(), 3);
}

// ===== Typewriter and pointer =====

#[test]
fn ticks_reveal_headline_after_delay() {
    let (mut state, start) = mounted(true);
    assert!(!state.tick(start + Duration::from_millis(50)));
    assert!(state.tick(start + Duration::from_millis(125)));

    let view = state.view().expect("mounted");
    assert_eq!(view.typewriter().visible_text(), "Fr");

    state.tick(start + Duration::from_secs(60));
    assert!(!state.is_animating());
}

#[test]
fn pointer_moves_request_redraw_only_with_parallax() {
    let (mut state, _) = mounted(false);
    assert!(state.pointer_moved(5, 5));
    assert!(!state.pointer_moved(5, 5));

    let mut no_parallax = options(false);
    no_parallax.pointer_parallax = false;
    let mut state = AppState::new(Portfolio::default(), Viewport::new(100, 30), no_parallax);
    state.mount(Instant::now());
    assert!(!state.pointer_moved(7, 8));
    let pointer = state.view().expect("mounted").tracker().pointer();
    assert_eq!((pointer.x, pointer.y), (7, 8));
}

#[test]
fn toggle_help_resets_scroll() {
    let (mut state, _) = mounted(false);
    state.help_scroll_offset = 5;
    state.toggle_help();
    assert!(state.help_visible);
    assert_eq!(state.help_scroll_offset, 0);
    state.toggle_help();
    assert!(!state.help_visible);
}
