use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

use centresnap::{
    CentreSnap, CentreSnapOptions, CentringOffset, GeometryProvider, Orientation, Point,
    ScrollSink, ScrollState, Selection, SnapAdapter,
};

fn controller(orientation: Orientation, count: usize, extent: u32) -> Controller {
    let mut snap = CentreSnap::new(CentreSnapOptions::fixed(orientation, extent as i32));
    snap.attach_adapter(SnapAdapter::new(count, 0)).unwrap();
    let host = StripHost::fixed(orientation, count, extent);
    Controller::new(snap, host)
}

/// Ticks at ~60fps until the host stops animating. Returns the last tick time.
fn run_until_idle(c: &mut Controller, mut now_ms: u64) -> u64 {
    for _ in 0..1000 {
        if !c.is_animating() {
            break;
        }
        now_ms += 16;
        c.tick(now_ms);
    }
    assert!(!c.is_animating(), "animation did not finish");
    now_ms
}

fn centre_item_near(c: &Controller) -> Option<(usize, i32)> {
    let host = c.host();
    let (w, h) = host.viewport_size();
    let item = host.find_item_at(Point::new((w / 2) as i32, (h / 2) as i32))?;
    Some((item.index, item.near(host.orientation())))
}

#[test]
fn tween_lands_exactly_on_target() {
    let t = Tween::new(-40, 660, 100, 200, Easing::DecelerateQuad);
    assert_eq!(t.sample(0), -40);
    assert_eq!(t.sample(100), -40);
    let mid = t.sample(200);
    assert!(mid > 310 && mid < 660, "decelerating tween is past halfway at t=0.5");
    assert_eq!(t.sample(300), 660);
    assert!(t.is_done(300));
    assert!(!t.is_done(299));

    let zero = Tween::new(5, 9, 0, 0, Easing::Linear);
    assert_eq!(zero.duration_ms, 1);
    assert_eq!(zero.sample(1), 9);
}

#[test]
fn tween_retarget_starts_from_current_position() {
    let mut t = Tween::new(0, 1000, 0, 100, Easing::Linear);
    t.retarget(50, 200, 100);
    assert_eq!(t.from, 500);
    assert_eq!(t.to, 200);
    assert_eq!(t.start_ms, 50);
    assert_eq!(t.sample(150), 200);
}

#[test]
fn easing_curves_hit_both_ends() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::DecelerateQuad] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
}

#[test]
fn strip_host_materializes_only_visible_items() {
    let mut host = StripHost::fixed(Orientation::Horizontal, 10, 100);
    host.set_viewport_size(400, 100);
    host.set_padding(centresnap::EdgePadding {
        leading: 150,
        trailing: 150,
    });
    assert_eq!(host.max_scroll_offset(), 900);

    let first = host.materialized_item(0).unwrap();
    assert_eq!((first.left, first.right), (150, 250));
    assert!(host.materialized_item(2).is_some());
    assert!(host.materialized_item(3).is_none());
    assert!(host.materialized_item(10).is_none());

    // Leading padding is not an item.
    assert_eq!(host.find_item_at(Point::new(20, 50)), None);
    assert_eq!(host.find_item_at(Point::new(200, 50)).map(|g| g.index), Some(0));
    assert_eq!(host.find_item_at(Point::new(200, 100)), None);
}

#[test]
fn strip_host_queues_state_changes_in_order() {
    let mut host = StripHost::fixed(Orientation::Vertical, 10, 50);
    host.set_viewport_size(80, 200);

    host.drag_by(30);
    host.drag_by(5);
    host.fling(100);
    assert_eq!(
        host.take_state_changes(),
        vec![ScrollState::Dragging, ScrollState::Settling]
    );

    host.tick(100);
    assert!(host.take_state_changes().is_empty());
    host.tick(1000);
    assert_eq!(host.scroll_offset(), 135);
    assert_eq!(host.take_state_changes(), vec![ScrollState::Idle]);
    assert!(host.take_state_changes().is_empty());
}

#[test]
fn strip_host_plain_scroll_jumps_without_state_changes() {
    let mut host = StripHost::fixed(Orientation::Horizontal, 10, 100);
    host.set_viewport_size(400, 100);

    host.scroll_to_index(2);
    assert_eq!(host.scroll_offset(), 0);
    host.scroll_to_index(6);
    assert_eq!(host.scroll_offset(), 600);
    assert!(!host.is_animating());
    assert!(host.take_state_changes().is_empty());
}

#[test]
fn drag_and_release_snaps_the_nearest_item_to_centre() {
    let mut c = controller(Orientation::Horizontal, 10, 100);
    assert_eq!(
        c.on_viewport_size(400, 100).unwrap(),
        Some(CentringOffset::Exact { delta: 0 })
    );
    assert_eq!(c.host().padding().leading, 150);

    c.drag_by(230);
    c.release();
    // Item 2 spans [120, 220): 30px before the centre.
    assert_eq!(c.current_index(), Some(2));
    assert_eq!(c.last_settle().map(|s| s.delta), Some(-30));
    assert!(c.is_animating());

    run_until_idle(&mut c, 0);
    assert_eq!(c.host().scroll_offset(), 200);
    assert_eq!(c.current_index(), Some(2));
    assert_eq!(c.last_settle().map(|s| s.delta), Some(0));
    assert_eq!(c.corrections(), 1);
    assert_eq!(centre_item_near(&c), Some((2, 150)));
}

#[test]
fn scroll_to_off_screen_item_settles_centred() {
    let mut c = controller(Orientation::Horizontal, 10, 100);
    c.on_viewport_size(400, 100).unwrap();

    assert_eq!(
        c.scroll_to(7),
        Some(CentringOffset::Approximate {
            index: 7,
            offset: 150
        })
    );
    run_until_idle(&mut c, 0);
    assert_eq!(c.current_index(), Some(7));
    assert_eq!(c.corrections(), 0);
    assert_eq!(centre_item_near(&c), Some((7, 150)));
}

#[test]
fn flings_converge_with_at_most_one_correction() {
    for distance in [-500i64, 17, 333, 1234, 5000] {
        let mut c = controller(Orientation::Horizontal, 10, 100);
        c.on_viewport_size(400, 100).unwrap();

        c.drag_by(distance / 2);
        c.fling(distance);
        run_until_idle(&mut c, 0);

        assert!(c.corrections() <= 1, "distance={distance}");
        let settle = c.last_settle().unwrap();
        assert!(settle.delta.unsigned_abs() <= centresnap::SNAP_THRESHOLD_PIXELS);
        assert_eq!(c.current_index(), Some(settle.index));
        let (index, near) = centre_item_near(&c).unwrap();
        assert_eq!(index, settle.index);
        assert!((near - 150).abs() <= 1, "distance={distance} near={near}");
    }
}

#[test]
fn parity_mismatch_stops_inside_the_dead_zone() {
    let mut now_ms = 0;
    let mut c = controller(Orientation::Horizontal, 20, 101);
    c.on_viewport_size(400, 100).unwrap();
    assert_eq!(c.host().padding().leading, 149);

    for (i, drag) in [260i64, 77, -131, 403, 1].into_iter().enumerate() {
        c.drag_by(drag);
        c.release();
        now_ms = run_until_idle(&mut c, now_ms);

        assert!(c.corrections() <= i + 1);
        let settle = c.last_settle().unwrap();
        assert!(settle.delta.unsigned_abs() <= centresnap::SNAP_THRESHOLD_PIXELS);
        assert_eq!(c.host().state(), ScrollState::Idle);
    }
}

#[test]
fn vertical_lists_snap_along_y() {
    let mut c = controller(Orientation::Vertical, 12, 60);
    c.on_viewport_size(80, 300).unwrap();
    assert_eq!(c.host().padding().leading, 120);

    c.drag_by(95);
    c.release();
    assert_eq!(c.last_settle().map(|s| (s.index, s.delta)), Some((2, 25)));
    run_until_idle(&mut c, 0);
    assert_eq!(c.host().scroll_offset(), 120);
    assert_eq!(centre_item_near(&c), Some((2, 120)));
}

#[test]
fn scroll_before_measurement_falls_back_to_plain_scroll() {
    let mut c = controller(Orientation::Horizontal, 10, 100);
    assert_eq!(c.scroll_to(5), Some(CentringOffset::Default { index: 5 }));
    assert!(!c.is_animating());
    assert_eq!(c.host().scroll_offset(), 500);
    // No settle happened, so the selection did not move.
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn new_scroll_supersedes_animation_in_flight() {
    let mut c = controller(Orientation::Horizontal, 10, 100);
    c.on_viewport_size(400, 100).unwrap();

    c.scroll_to(7);
    c.tick(100);
    assert!(c.is_animating());

    // Item 2 is partially on screen mid-animation: exact tier.
    assert!(matches!(c.scroll_to(2), Some(CentringOffset::Exact { .. })));
    run_until_idle(&mut c, 100);
    assert_eq!(c.host().scroll_offset(), 200);
    assert_eq!(c.current_index(), Some(2));
    assert_eq!(c.corrections(), 0);
}

#[test]
fn rotation_keeps_the_selected_item_centred() {
    let mut c = controller(Orientation::Horizontal, 10, 100);
    c.on_viewport_size(400, 100).unwrap();
    c.scroll_to(4);
    run_until_idle(&mut c, 0);
    assert_eq!(c.current_index(), Some(4));

    c.on_viewport_size(700, 100).unwrap();
    run_until_idle(&mut c, 1000);
    assert_eq!(c.host().padding().leading, 300);
    assert_eq!(c.current_index(), Some(4));
    assert_eq!(centre_item_near(&c), Some((4, 300)));
}

#[test]
fn selection_listener_sees_every_settle() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let selection = Selection::new(0).with_on_change({
        let seen = Arc::clone(&seen);
        move |i| seen.lock().unwrap().push(i)
    });
    let mut snap = CentreSnap::new(CentreSnapOptions::fixed(Orientation::Horizontal, 100));
    snap.attach_adapter(SnapAdapter::with_selection(10, selection))
        .unwrap();
    let mut c = Controller::new(snap, StripHost::fixed(Orientation::Horizontal, 10, 100));
    c.on_viewport_size(400, 100).unwrap();

    c.drag_by(230);
    c.release();
    let now_ms = run_until_idle(&mut c, 0);
    c.scroll_to(5);
    run_until_idle(&mut c, now_ms);

    // One report when the drag settles, one after its correction, one for the scroll.
    assert_eq!(*seen.lock().unwrap(), vec![2, 2, 5]);
}

#[test]
fn smooth_scroll_by_ignores_the_cross_axis() {
    let mut host = StripHost::fixed(Orientation::Horizontal, 10, 100);
    host.set_viewport_size(400, 100);
    host.smooth_scroll_by(120, 999);
    host.tick(10_000);
    assert_eq!(host.scroll_offset(), 120);
}

#[test]
fn appended_items_can_be_selected_after_a_data_change() {
    let mut c = controller(Orientation::Horizontal, 10, 100);
    c.on_viewport_size(400, 100).unwrap();

    assert_eq!(
        c.on_data_changed(20),
        Some(CentringOffset::Exact { delta: 0 })
    );
    assert_eq!(c.snap().item_count(), 20);
    assert_eq!(c.host().count(), 20);

    c.drag_by(1500);
    c.release();
    assert_eq!(c.current_index(), Some(15));
    assert_eq!(c.last_settle().map(|s| s.delta), Some(0));
    assert_eq!(centre_item_near(&c), Some((15, 150)));
}
