use alloc::sync::Arc;
use alloc::vec::Vec;

use centresnap::{
    EdgePadding, GeometryProvider, ItemGeometry, Orientation, Point, ScrollSink, ScrollState,
};

use crate::{Easing, Tween};

/// A reference scrolling container that holds no UI objects.
///
/// Items are laid out back-to-back along the scroll axis after `padding.leading`, and followed
/// by `padding.trailing`. Items that intersect the viewport are materialized. Smooth scrolls run
/// on a [`Tween`] advanced by [`Self::tick`]; a new scroll command retargets the tween in flight.
///
/// Scroll state changes are queued in delivery order; drain them with
/// [`Self::take_state_changes`] and feed them to the snap corrector one by one.
#[derive(Clone)]
pub struct StripHost {
    orientation: Orientation,
    width: u32,
    height: u32,
    extent_of: Arc<dyn Fn(usize) -> u32 + Send + Sync>,
    // starts[i] = offset of item i in the content (without padding); starts[count] = content size.
    starts: Vec<u64>,
    padding: EdgePadding,

    offset: i64,
    state: ScrollState,
    state_changes: Vec<ScrollState>,

    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
    now_ms: u64,
}

impl StripHost {
    pub fn new(
        orientation: Orientation,
        count: usize,
        extent_of: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        let mut host = Self {
            orientation,
            width: 0,
            height: 0,
            extent_of: Arc::new(extent_of),
            starts: Vec::new(),
            padding: EdgePadding::default(),
            offset: 0,
            state: ScrollState::Idle,
            state_changes: Vec::new(),
            tween: None,
            duration_ms: 250,
            easing: Easing::default(),
            now_ms: 0,
        };
        host.rebuild(count);
        host
    }

    /// A strip of `count` items that all share `extent`.
    pub fn fixed(orientation: Orientation, count: usize, extent: u32) -> Self {
        Self::new(orientation, count, move |_| extent)
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    fn rebuild(&mut self, count: usize) {
        self.starts.clear();
        self.starts.reserve_exact(count + 1);
        let mut acc = 0u64;
        self.starts.push(acc);
        for i in 0..count {
            acc = acc.saturating_add((self.extent_of)(i) as u64);
            self.starts.push(acc);
        }
        self.offset = self.clamp_offset(self.offset);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn count(&self) -> usize {
        self.starts.len() - 1
    }

    pub fn set_count(&mut self, count: usize) {
        if count != self.count() {
            self.rebuild(count);
        }
    }

    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.offset = self.clamp_offset(self.offset);
    }

    /// Extent of the viewport along the scroll axis.
    pub fn viewport_extent(&self) -> u32 {
        self.orientation.main(self.width, self.height)
    }

    pub fn padding(&self) -> EdgePadding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: EdgePadding) {
        self.padding = padding;
        self.offset = self.clamp_offset(self.offset);
    }

    pub fn scroll_offset(&self) -> i64 {
        self.offset
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn total_size(&self) -> u64 {
        self.content_size().saturating_add(self.padding.total())
    }

    pub fn max_scroll_offset(&self) -> i64 {
        let max = self
            .total_size()
            .saturating_sub(self.viewport_extent() as u64);
        max.min(i64::MAX as u64) as i64
    }

    pub fn clamp_offset(&self, offset: i64) -> i64 {
        offset.clamp(0, self.max_scroll_offset())
    }

    /// Start of item `index` along the scroll axis, in scroll (not viewport) coordinates.
    pub fn item_start(&self, index: usize) -> Option<i64> {
        if index >= self.count() {
            return None;
        }
        Some(self.padding.leading as i64 + self.starts[index] as i64)
    }

    /// Moves the content by a user drag. Cancels any animation.
    pub fn drag_by(&mut self, delta: i64) {
        self.tween = None;
        self.set_state(ScrollState::Dragging);
        self.offset = self.clamp_offset(self.offset.saturating_add(delta));
    }

    /// Ends a drag with no fling.
    pub fn release(&mut self) {
        if self.state == ScrollState::Dragging {
            self.set_state(ScrollState::Idle);
        }
    }

    /// Ends a drag by flinging `distance` pixels further.
    pub fn fling(&mut self, distance: i64) {
        let target = self.offset.saturating_add(distance);
        self.animate_to(target);
        if self.tween.is_none() {
            self.release();
        }
    }

    /// Advances the animation in flight, if any.
    ///
    /// Returns the scroll offset after the tick.
    pub fn tick(&mut self, now_ms: u64) -> i64 {
        self.now_ms = now_ms;
        if let Some(tween) = self.tween {
            self.offset = self.clamp_offset(tween.sample(now_ms));
            if tween.is_done(now_ms) {
                self.tween = None;
                self.set_state(ScrollState::Idle);
            }
        }
        self.offset
    }

    /// Drains the queued scroll state changes, oldest first.
    pub fn take_state_changes(&mut self) -> Vec<ScrollState> {
        core::mem::take(&mut self.state_changes)
    }

    fn set_state(&mut self, state: ScrollState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.state_changes.push(state);
    }

    fn animate_to(&mut self, target: i64) {
        let target = self.clamp_offset(target);
        match &mut self.tween {
            Some(tween) => tween.retarget(self.now_ms, target, self.duration_ms),
            None if target == self.offset => return,
            None => {
                self.tween = Some(Tween::new(
                    self.offset,
                    target,
                    self.now_ms,
                    self.duration_ms,
                    self.easing,
                ));
            }
        }
        self.set_state(ScrollState::Settling);
    }

    fn content_size(&self) -> u64 {
        self.starts.last().copied().unwrap_or(0)
    }

    fn geometry(&self, index: usize) -> Option<ItemGeometry> {
        let start = self.item_start(index)?;
        let end = start + (self.starts[index + 1] - self.starts[index]) as i64;
        let near = saturate(start - self.offset);
        let far = saturate(end - self.offset);
        let (cross_w, cross_h) = (saturate(self.width as i64), saturate(self.height as i64));
        Some(match self.orientation {
            Orientation::Horizontal => ItemGeometry {
                index,
                left: near,
                top: 0,
                right: far,
                bottom: cross_h,
            },
            Orientation::Vertical => ItemGeometry {
                index,
                left: 0,
                top: near,
                right: cross_w,
                bottom: far,
            },
        })
    }
}

impl GeometryProvider for StripHost {
    fn viewport_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn find_item_at(&self, point: Point) -> Option<ItemGeometry> {
        let main = self.orientation.main(point.x, point.y);
        if main < 0 || main as u32 >= self.viewport_extent() {
            return None;
        }
        let in_content = self.offset + main as i64 - self.padding.leading as i64;
        if in_content < 0 {
            return None;
        }
        // Last item whose start is <= in_content.
        let index = self
            .starts
            .partition_point(|&s| s <= in_content as u64)
            .checked_sub(1)?;
        if index >= self.count() {
            return None;
        }
        let geometry = self.geometry(index)?;
        geometry.contains(point).then_some(geometry)
    }

    fn materialized_item(&self, index: usize) -> Option<ItemGeometry> {
        let geometry = self.geometry(index)?;
        let extent = self.viewport_extent() as i32;
        let near = geometry.near(self.orientation);
        let far = geometry.far(self.orientation);
        (far > 0 && near < extent).then_some(geometry)
    }
}

impl ScrollSink for StripHost {
    fn smooth_scroll_by(&mut self, dx: i32, dy: i32) {
        let delta = self.orientation.main(dx, dy) as i64;
        self.animate_to(self.offset.saturating_add(delta));
    }

    fn smooth_scroll_to_offset(&mut self, index: usize, offset: i32) {
        let Some(start) = self.item_start(index) else {
            return;
        };
        self.animate_to(start - offset as i64);
    }

    fn scroll_to_index(&mut self, index: usize) {
        let Some(start) = self.item_start(index) else {
            return;
        };
        // Jump; no scroll states are reported, as with a plain scroll-to-position.
        self.tween = None;
        let view_end = self.offset + self.viewport_extent() as i64;
        let end = start + (self.starts[index + 1] - self.starts[index]) as i64;
        if start < self.offset || end > view_end {
            self.offset = self.clamp_offset(start);
        }
    }
}

impl core::fmt::Debug for StripHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StripHost")
            .field("orientation", &self.orientation)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("count", &self.count())
            .field("padding", &self.padding)
            .field("offset", &self.offset)
            .field("state", &self.state)
            .field("tween", &self.tween)
            .finish_non_exhaustive()
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
