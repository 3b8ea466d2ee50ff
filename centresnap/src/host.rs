use crate::{ItemGeometry, Point};

/// Read access to the host scrolling container's on-screen geometry.
pub trait GeometryProvider {
    /// Current viewport `(width, height)` in pixels.
    fn viewport_size(&self) -> (u32, u32);

    /// Returns the materialized item whose bounds contain `point`, if any.
    fn find_item_at(&self, point: Point) -> Option<ItemGeometry>;

    /// Returns the geometry of the item at `index` if it is currently materialized.
    fn materialized_item(&self, index: usize) -> Option<ItemGeometry>;
}

/// Scroll commands issued to the host scrolling container.
///
/// A new command supersedes any animation still in flight.
pub trait ScrollSink {
    /// Animated scroll by a pixel delta.
    fn smooth_scroll_by(&mut self, dx: i32, dy: i32);

    /// Positions `index` so that its near edge sits `offset` pixels from the viewport's near edge.
    fn smooth_scroll_to_offset(&mut self, index: usize, offset: i32);

    /// Brings `index` into view with no alignment guarantee.
    fn scroll_to_index(&mut self, index: usize);
}

/// Everything the centring container needs from its host.
pub trait ScrollHost: GeometryProvider + ScrollSink {}

impl<T: GeometryProvider + ScrollSink + ?Sized> ScrollHost for T {}

/// The selected item, as owned by the adapter collaborator.
pub trait SelectionSink {
    fn current_index(&self) -> usize;

    /// The only way the selection changes.
    fn on_item_selected(&mut self, index: usize);
}

/// The item collaborator attached to a [`crate::CentreSnap`].
///
/// Only adapters that expose a selection through both `selection` and `selection_mut` can drive
/// a centre-snapping list. Both default to `None`; an adapter missing either one is rejected at
/// attach time.
pub trait ItemAdapter {
    fn item_count(&self) -> usize;

    /// Called when the host's data now holds `count` items.
    ///
    /// Adapters that own their data already report the new count and can keep the default.
    fn set_item_count(&mut self, _count: usize) {}

    fn selection(&self) -> Option<&dyn SelectionSink> {
        None
    }

    fn selection_mut(&mut self) -> Option<&mut dyn SelectionSink> {
        None
    }
}
