// Example: implementing the host traits for your own scrolling container.
use centresnap::{
    CentreSnap, CentreSnapOptions, GeometryProvider, ItemGeometry, Orientation, Point,
    ScrollSink, ScrollState, SnapAdapter,
};

/// A row of 80px-wide cells, scrolled by `offset`, with corrections applied instantly.
struct Row {
    offset: i32,
    count: usize,
}

impl Row {
    const CELL: i32 = 80;
    const WIDTH: u32 = 300;
    const HEIGHT: u32 = 60;

    fn cell(&self, index: usize) -> Option<ItemGeometry> {
        if index >= self.count {
            return None;
        }
        // Leading padding: (300 - 80) / 2
        let left = 110 + index as i32 * Self::CELL - self.offset;
        Some(ItemGeometry {
            index,
            left,
            top: 0,
            right: left + Self::CELL,
            bottom: Self::HEIGHT as i32,
        })
    }
}

impl GeometryProvider for Row {
    fn viewport_size(&self) -> (u32, u32) {
        (Self::WIDTH, Self::HEIGHT)
    }

    fn find_item_at(&self, point: Point) -> Option<ItemGeometry> {
        (0..self.count)
            .filter_map(|i| self.cell(i))
            .find(|g| g.contains(point))
    }

    fn materialized_item(&self, index: usize) -> Option<ItemGeometry> {
        self.cell(index)
            .filter(|g| g.right > 0 && g.left < Self::WIDTH as i32)
    }
}

impl ScrollSink for Row {
    fn smooth_scroll_by(&mut self, dx: i32, _dy: i32) {
        println!("  smooth_scroll_by({dx})");
        self.offset += dx;
    }

    fn smooth_scroll_to_offset(&mut self, index: usize, offset: i32) {
        println!("  smooth_scroll_to_offset({index}, {offset})");
        self.offset = index as i32 * Self::CELL + 110 - offset;
    }

    fn scroll_to_index(&mut self, index: usize) {
        println!("  scroll_to_index({index})");
        self.offset = index as i32 * Self::CELL;
    }
}

fn main() {
    let mut row = Row {
        offset: 0,
        count: 50,
    };
    let mut snap = CentreSnap::new(CentreSnapOptions::fixed(Orientation::Horizontal, Row::CELL));
    snap.attach_adapter(SnapAdapter::new(row.count, 0))
        .expect("SnapAdapter exposes a selection");
    snap.on_measured(Row::WIDTH as i32)
        .expect("extents are non-negative");

    // The user drags 130px and lets go.
    row.offset += 130;
    for state in [ScrollState::Dragging, ScrollState::Idle] {
        if let Some(settle) = snap.on_scroll_state_changed(state, &mut row) {
            println!("settled on {} (delta={})", settle.index, settle.delta);
        }
    }
    // The correction scroll finishes.
    for state in [ScrollState::Settling, ScrollState::Idle] {
        if let Some(settle) = snap.on_scroll_state_changed(state, &mut row) {
            println!("settled on {} (delta={})", settle.index, settle.delta);
        }
    }

    println!("jump to 30:");
    snap.request_scroll_to(30, &mut row);
    println!("selected={:?} offset={}", snap.current_index(), row.offset);
}
