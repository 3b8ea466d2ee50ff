use crate::{GeometryProvider, Orientation, Point, ScrollSink, ScrollState, SettleOutcome};

/// Default dead-zone, in pixels, below which no correction scroll is issued.
pub const SNAP_THRESHOLD_PIXELS: u32 = 1;

/// The scroll state machine that snaps the centre item once scrolling settles.
///
/// Feed it every scroll state the host reports, in delivery order. On each transition *into*
/// [`ScrollState::Idle`] it finds the item under the viewport centre, reports it as selected, and
/// scrolls by the residual needed to centre it. Repeated idle reports do not re-run the settle.
///
/// The dead-zone matters when the viewport and item extents have different parity: the residual
/// can never reach zero, and without it every correction would settle into another correction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapCorrector {
    orientation: Orientation,
    threshold: u32,
    // `None` until the first report, so an initial idle still settles.
    previous: Option<ScrollState>,
}

impl SnapCorrector {
    pub fn new(orientation: Orientation) -> Self {
        Self::with_threshold(orientation, SNAP_THRESHOLD_PIXELS)
    }

    pub fn with_threshold(orientation: Orientation, threshold: u32) -> Self {
        Self {
            orientation,
            threshold,
            previous: None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn previous_state(&self) -> Option<ScrollState> {
        self.previous
    }

    /// Forgets the last reported state.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Processes one reported scroll state.
    ///
    /// Returns the settle outcome when this report was a transition into idle and an item was
    /// found under the centre.
    pub fn on_scroll_state_changed<H>(
        &mut self,
        state: ScrollState,
        host: &mut H,
        on_selected: &mut dyn FnMut(usize),
    ) -> Option<SettleOutcome>
    where
        H: GeometryProvider + ScrollSink + ?Sized,
    {
        let outcome = if state.is_idle() && self.previous != Some(state) {
            self.settle(host, on_selected)
        } else {
            None
        };
        ctrace!(?state, previous = ?self.previous, "SnapCorrector::on_scroll_state_changed");
        self.previous = Some(state);
        outcome
    }

    /// Runs the settle procedure unconditionally.
    ///
    /// Does nothing (and returns `None`) when no item lies under the viewport centre.
    pub fn settle<H>(
        &self,
        host: &mut H,
        on_selected: &mut dyn FnMut(usize),
    ) -> Option<SettleOutcome>
    where
        H: GeometryProvider + ScrollSink + ?Sized,
    {
        let (width, height) = host.viewport_size();
        let centre = Point::new(half_px(width), half_px(height));

        let Some(item) = host.find_item_at(centre) else {
            cdebug!(x = centre.x, y = centre.y, "settle: no item under viewport centre");
            return None;
        };

        on_selected(item.index);

        let delta = self.residual(item.near(self.orientation), item.far(self.orientation), centre);
        let corrected = delta.unsigned_abs() > self.threshold;
        if corrected {
            let (dx, dy) = self.orientation.compose(delta);
            host.smooth_scroll_by(dx, dy);
        }

        cdebug!(index = item.index, delta, corrected, "settle");
        Some(SettleOutcome {
            index: item.index,
            delta,
            corrected,
        })
    }

    /// Pixels to scroll so the item's midpoint lands on the viewport centre.
    ///
    /// Positive when the item sits past the centre.
    fn residual(&self, near: i32, far: i32, centre: Point) -> i32 {
        let c = self.orientation.main(centre.x, centre.y) as i64;
        let start_from_centre = c - near as i64;
        let end_from_centre = far as i64 - c;
        let delta = (end_from_centre - start_from_centre) / 2;
        delta.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }
}

fn half_px(v: u32) -> i32 {
    (v / 2).min(i32::MAX as u32) as i32
}
