use alloc::sync::Arc;

use crate::{Orientation, SNAP_THRESHOLD_PIXELS};

/// A provider of the expected item extent along the scroll axis.
///
/// Called when the container remeasures after a viewport resize. Fixed-size items work best; if
/// sizes vary a little, an average is good enough. May be costly: the container only calls it
/// when its measurements are dirty.
pub type ItemExtentProvider = Arc<dyn Fn() -> i32 + Send + Sync>;

/// Configuration for [`crate::CentreSnap`].
///
/// Cheap to clone: the item extent provider is held in an `Arc`.
pub struct CentreSnapOptions {
    /// Scroll axis, fixed for the lifetime of the container.
    pub orientation: Orientation,

    pub item_extent: ItemExtentProvider,

    /// Dead-zone (pixels) below which the settle procedure issues no correction.
    pub snap_threshold_px: u32,

    /// Whether the container pads both ends so the first and last items can reach the centre.
    pub edge_padding: bool,
}

impl Clone for CentreSnapOptions {
    fn clone(&self) -> Self {
        Self {
            orientation: self.orientation,
            item_extent: Arc::clone(&self.item_extent),
            snap_threshold_px: self.snap_threshold_px,
            edge_padding: self.edge_padding,
        }
    }
}

impl CentreSnapOptions {
    /// Creates options for a list along `orientation`.
    ///
    /// `item_extent()` should return the (fixed or average) size of an item in the scroll axis.
    pub fn new(
        orientation: Orientation,
        item_extent: impl Fn() -> i32 + Send + Sync + 'static,
    ) -> Self {
        Self {
            orientation,
            item_extent: Arc::new(item_extent),
            snap_threshold_px: SNAP_THRESHOLD_PIXELS,
            edge_padding: true,
        }
    }

    /// Options for items that all share the same extent.
    pub fn fixed(orientation: Orientation, item_extent: i32) -> Self {
        Self::new(orientation, move || item_extent)
    }

    pub fn with_item_extent(mut self, item_extent: impl Fn() -> i32 + Send + Sync + 'static) -> Self {
        self.item_extent = Arc::new(item_extent);
        self
    }

    pub fn with_snap_threshold_px(mut self, snap_threshold_px: u32) -> Self {
        self.snap_threshold_px = snap_threshold_px;
        self
    }

    pub fn with_edge_padding(mut self, edge_padding: bool) -> Self {
        self.edge_padding = edge_padding;
        self
    }
}

impl core::fmt::Debug for CentreSnapOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CentreSnapOptions")
            .field("orientation", &self.orientation)
            .field("snap_threshold_px", &self.snap_threshold_px)
            .field("edge_padding", &self.edge_padding)
            .finish_non_exhaustive()
    }
}
