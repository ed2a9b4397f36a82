// Host-side tests for the attach/detach hysteresis.

use glam::Vec2;
use wire_core::*;

fn cfg() -> WireConfig {
    WireConfig::default()
}

#[test]
fn near_pointer_overrides_scroll_detach() {
    assert!(!should_detach(150.0, 50.0, false, &cfg()));
    assert!(should_detach(150.0, 500.0, false, &cfg()));
}

#[test]
fn unscrolled_page_stays_attached_at_any_distance() {
    assert!(!should_detach(0.0, 5000.0, false, &cfg()));
    assert!(!should_detach(100.0, 5000.0, false, &cfg()), "offset must exceed 100");
}

#[test]
fn reattach_threshold_is_exclusive() {
    assert!(should_detach(150.0, REATTACH_DISTANCE, false, &cfg()));
    assert!(!should_detach(150.0, REATTACH_DISTANCE - 0.01, false, &cfg()));
}

#[test]
fn compact_viewport_always_detaches() {
    for (scroll, dist) in [(0.0, 0.0), (150.0, 50.0), (1000.0, 1000.0)] {
        assert!(should_detach(scroll, dist, true, &cfg()));
    }
}

#[test]
fn centroid_of_anchors() {
    assert_eq!(centroid(&[]), None);
    let c = centroid(&[Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0)]);
    assert_eq!(c, Some(Vec2::new(5.0, 10.0)));
}

#[test]
fn starting_state_ignores_proximity() {
    let c = cfg();
    assert!(!AttachmentController::starting(0.0, false, &c).is_detached());
    assert!(AttachmentController::starting(150.0, false, &c).is_detached());
    assert!(AttachmentController::starting(0.0, true, &c).is_detached());
}

#[test]
fn update_reports_each_transition_once() {
    let c = cfg();
    let anchors = [Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0)];
    let near = Vec2::new(200.0, 150.0);
    let far = Vec2::new(1200.0, 900.0);
    let mut ctl = AttachmentController::starting(0.0, false, &c);

    assert_eq!(ctl.update(0.0, far, &anchors, false, &c), None);
    assert_eq!(
        ctl.update(400.0, far, &anchors, false, &c),
        Some(Transition::Detached)
    );
    assert_eq!(ctl.update(400.0, far, &anchors, false, &c), None);
    assert_eq!(
        ctl.update(400.0, near, &anchors, false, &c),
        Some(Transition::Attached)
    );
    assert!(!ctl.is_detached());
    assert!((ctl.last_distance().unwrap_or(f32::MAX) - 50.0).abs() < 1e-4);
}

#[test]
fn empty_anchor_list_keeps_previous_state() {
    let c = cfg();
    let mut ctl = AttachmentController::starting(400.0, false, &c);
    assert!(ctl.is_detached());
    assert_eq!(ctl.update(0.0, Vec2::ZERO, &[], false, &c), None);
    assert!(ctl.is_detached());

    let mut attached = AttachmentController::starting(0.0, false, &c);
    assert_eq!(attached.update(900.0, Vec2::ZERO, &[], false, &c), None);
    assert!(!attached.is_detached());
    assert_eq!(
        attached.update(900.0, Vec2::ZERO, &[], true, &c),
        Some(Transition::Detached)
    );
}
