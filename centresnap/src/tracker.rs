use crate::{CentringOffset, Error, MaterializedItem, Result, Viewport};

/// Tracks the viewport extent and the expected item extent, and turns them into centring
/// offsets.
///
/// Offsets are chosen in three tiers of decreasing accuracy:
/// - **Exact**: the target item is on screen, so its real near edge and measured extent give the
///   residual between where it is and where it would be if centred.
/// - **Approximate**: the item is not laid out yet, but the expected item extent places it at
///   `(viewport - item) / 2` from the near edge. Items that vary in size land slightly off.
/// - **Default**: no measurements at all. The caller falls back to a plain scroll. This should
///   not happen once the container has been measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeasurementTracker {
    viewport: Viewport,
    item_extent: u32,
}

impl MeasurementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn item_extent(&self) -> u32 {
        self.item_extent
    }

    pub fn measurements_valid(&self) -> bool {
        self.viewport.measurements_valid
    }

    /// Marks the stored measurements unusable until the next [`Self::set_measurements`].
    pub fn invalidate(&mut self) {
        if self.viewport.measurements_valid {
            ctrace!(extent = self.viewport.extent, "MeasurementTracker::invalidate");
        }
        self.viewport.measurements_valid = false;
    }

    /// Records new sizes and marks them valid.
    ///
    /// Negative values are rejected and leave the tracker unchanged.
    pub fn set_measurements(&mut self, viewport_extent: i32, item_extent: i32) -> Result<()> {
        let viewport_extent = non_negative("viewport extent", viewport_extent)?;
        let item_extent = non_negative("item extent", item_extent)?;
        ctrace!(
            viewport_extent,
            item_extent,
            "MeasurementTracker::set_measurements"
        );
        self.viewport = Viewport::new(viewport_extent);
        self.item_extent = item_extent;
        Ok(())
    }

    /// Computes how to centre `target_index`.
    ///
    /// `materialized` is the item's on-screen geometry when it is currently laid out; it always
    /// wins over the approximation.
    pub fn compute_centring_offset(
        &self,
        target_index: usize,
        materialized: Option<MaterializedItem>,
    ) -> CentringOffset {
        if let Some(item) = materialized {
            let centred_near = half(self.viewport.extent as i64 - item.measured_extent as i64);
            let delta = saturate(item.near_edge as i64 - centred_near);
            return CentringOffset::Exact { delta };
        }

        if self.viewport.measurements_valid {
            let offset = saturate(half(
                self.viewport.extent as i64 - self.item_extent as i64,
            ));
            return CentringOffset::Approximate {
                index: target_index,
                offset,
            };
        }

        cwarn!(
            index = target_index,
            "centring requested before measurements; falling back to a plain scroll"
        );
        CentringOffset::Default {
            index: target_index,
        }
    }

    /// Space needed on each end so the first and last items can reach the centre.
    ///
    /// Zero while measurements are invalid or when items are wider than the viewport.
    pub fn edge_padding_extent(&self) -> u32 {
        if !self.viewport.measurements_valid {
            return 0;
        }
        self.viewport.extent.saturating_sub(self.item_extent) / 2
    }
}

pub(crate) fn non_negative(what: &'static str, value: i32) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::NegativeMeasurement { what, value })
}

// Truncates toward zero, like the host's integer pixel math.
fn half(v: i64) -> i64 {
    v / 2
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
