use centresnap::{CentreSnap, CentreSnapOptions, Orientation, Selection, SnapAdapter};
use centresnap_adapter::{Controller, Easing, StripHost};

fn main() {
    // Example: a frame-driven carousel. An adapter would:
    // - report measurements (and rotations) via on_viewport_size
    // - forward drags/flings from its input handling
    // - call tick(now_ms) in a frame loop while animating
    // - render items from the host's scroll offset
    let selection = Selection::new(0).with_on_change(|i| println!("  selected {i}"));
    let mut snap = CentreSnap::new(CentreSnapOptions::fixed(Orientation::Horizontal, 120));
    snap.attach_adapter(SnapAdapter::with_selection(100, selection))
        .expect("SnapAdapter exposes a selection");

    let host = StripHost::fixed(Orientation::Horizontal, 100, 120)
        .with_animation(200, Easing::DecelerateQuad);
    let mut c = Controller::new(snap, host);
    c.on_viewport_size(640, 160)
        .expect("extents are non-negative");
    println!("padding={:?}", c.host().padding());

    println!("fling:");
    c.drag_by(90);
    c.fling(1_000);
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        let off = c.tick(now_ms);
        if now_ms % 80 == 0 {
            println!("t={now_ms} off={off}");
        }
    }
    println!(
        "done: off={} selected={:?} corrections={}",
        c.host().scroll_offset(),
        c.current_index(),
        c.corrections()
    );

    println!("scroll_to(42):");
    c.scroll_to(42);
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!(
        "done: off={} selected={:?}",
        c.host().scroll_offset(),
        c.current_index()
    );
}
