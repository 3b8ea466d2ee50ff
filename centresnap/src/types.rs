/// The scroll axis of a snapping list.
///
/// Fixed at construction; every "extent", "near edge" and "far edge" is read along this axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Picks the component of `(x, y)` that lies on this axis.
    pub fn main<T>(self, x: T, y: T) -> T {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }

    /// Builds a `(dx, dy)` pair that moves only along this axis.
    pub fn compose(self, main: i32) -> (i32, i32) {
        match self {
            Self::Horizontal => (main, 0),
            Self::Vertical => (0, main),
        }
    }
}

/// Scroll state as reported by the host scrolling container.
///
/// Only the idle / not-idle distinction matters to the snap corrector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollState {
    Idle,
    Dragging,
    Settling,
}

impl ScrollState {
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A point in viewport coordinates (pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// On-screen bounds of a materialized item, relative to the viewport's origin.
///
/// Edges are signed: an item partially scrolled out of view has a negative near edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    pub index: usize,
    pub left: i32,
    pub top: i32,
    pub right: i32, // exclusive
    pub bottom: i32, // exclusive
}

impl ItemGeometry {
    /// The edge closest to zero scroll (left or top).
    pub fn near(&self, orientation: Orientation) -> i32 {
        orientation.main(self.left, self.top)
    }

    /// The edge opposite to [`Self::near`] (right or bottom).
    pub fn far(&self, orientation: Orientation) -> i32 {
        orientation.main(self.right, self.bottom)
    }

    pub fn extent(&self, orientation: Orientation) -> u32 {
        let near = self.near(orientation) as i64;
        let far = self.far(orientation) as i64;
        far.saturating_sub(near).clamp(0, u32::MAX as i64) as u32
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Projects the geometry onto `orientation` for the exact centring tier.
    pub fn materialized(&self, orientation: Orientation) -> MaterializedItem {
        MaterializedItem {
            near_edge: self.near(orientation),
            measured_extent: self.extent(orientation),
        }
    }
}

/// The slice of a materialized item's geometry used by the exact centring tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterializedItem {
    pub near_edge: i32,
    pub measured_extent: u32,
}

/// How a centring scroll should be issued, in decreasing order of confidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CentringOffset {
    /// The item is on screen: scroll by `delta` pixels along the scroll axis.
    Exact { delta: i32 },
    /// The item is not on screen but measurements are valid: position `index` at `offset`
    /// pixels from the viewport's near edge.
    Approximate { index: usize, offset: i32 },
    /// Nothing is known about sizes: plain scroll to `index`, no alignment guarantee.
    Default { index: usize },
}

/// Result of one settle procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettleOutcome {
    /// Index of the item found under the viewport centre (reported to the selection sink).
    pub index: usize,
    /// Signed residual between the item's midpoint and the viewport's centre.
    pub delta: i32,
    /// Whether a correction scroll was issued (`|delta|` above the snap threshold).
    pub corrected: bool,
}

/// Space added before the first item and after the last item so both can reach the centre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgePadding {
    pub leading: u32,
    pub trailing: u32,
}

impl EdgePadding {
    pub fn total(&self) -> u64 {
        self.leading as u64 + self.trailing as u64
    }
}
