use centresnap::{CentreSnap, CentreSnapOptions, MaterializedItem, Orientation, SnapAdapter};

fn main() {
    let mut snap = CentreSnap::new(CentreSnapOptions::fixed(Orientation::Horizontal, 150));
    snap.attach_adapter(SnapAdapter::new(1_000, 0))
        .expect("SnapAdapter exposes a selection");
    snap.on_measured(400).expect("extents are non-negative");

    println!("viewport={:?} padding={:?}", snap.viewport(), snap.edge_padding());

    let tracker = snap.tracker();
    println!("off screen: {:?}", tracker.compute_centring_offset(42, None));
    let on_screen = MaterializedItem {
        near_edge: 120,
        measured_extent: 200,
    };
    println!(
        "on screen:  {:?}",
        tracker.compute_centring_offset(42, Some(on_screen))
    );
}
