use alloc::boxed::Box;

use crate::tracker::non_negative;
use crate::{
    CentreSnapOptions, CentringOffset, EdgePadding, Error, ItemAdapter, MeasurementTracker,
    Orientation, Result, ScrollHost, ScrollState, SettleOutcome, SnapCorrector, Viewport,
};

/// A headless centre-snapping list.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects. The host scrolling container is passed to each call that
///   needs to query geometry or issue scrolls (see [`ScrollHost`]).
/// - Your adapter drives it by reporting measurements, layout changes and scroll states.
/// - The selected index lives in the attached [`ItemAdapter`] and only changes when the snap
///   corrector settles on an item.
///
/// Scroll requests always go through the centring tiers of [`MeasurementTracker`]; there is no
/// raw, non-centring scroll.
pub struct CentreSnap {
    options: CentreSnapOptions,
    tracker: MeasurementTracker,
    corrector: SnapCorrector,
    // Remeasuring the item extent may be costly; only done when set.
    measurements_dirty: bool,
    adapter: Option<Box<dyn ItemAdapter>>,
}

impl CentreSnap {
    pub fn new(options: CentreSnapOptions) -> Self {
        cdebug!(
            orientation = ?options.orientation,
            snap_threshold_px = options.snap_threshold_px,
            "CentreSnap::new"
        );
        Self {
            corrector: SnapCorrector::with_threshold(
                options.orientation,
                options.snap_threshold_px,
            ),
            tracker: MeasurementTracker::new(),
            measurements_dirty: true,
            adapter: None,
            options,
        }
    }

    pub fn options(&self) -> &CentreSnapOptions {
        &self.options
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn tracker(&self) -> &MeasurementTracker {
        &self.tracker
    }

    pub fn corrector(&self) -> &SnapCorrector {
        &self.corrector
    }

    pub fn viewport(&self) -> Viewport {
        self.tracker.viewport()
    }

    /// Attaches the item adapter.
    ///
    /// The adapter must expose its selection for both reading and writing, and for a non-empty
    /// list the selection must be in bounds. On success the snap corrector forgets the last reported scroll state, so the next
    /// idle report settles and selects.
    pub fn attach_adapter(&mut self, adapter: impl ItemAdapter + 'static) -> Result<()> {
        self.attach_boxed_adapter(Box::new(adapter))
    }

    pub fn attach_boxed_adapter(&mut self, mut adapter: Box<dyn ItemAdapter>) -> Result<()> {
        if adapter.selection_mut().is_none() {
            return Err(Error::NonConformingAdapter);
        }
        let Some(selection) = adapter.selection() else {
            return Err(Error::NonConformingAdapter);
        };
        let count = adapter.item_count();
        let index = selection.current_index();
        if count > 0 && index >= count {
            return Err(Error::SelectionOutOfBounds { index, count });
        }
        cdebug!(count, index, "CentreSnap::attach_adapter");
        self.adapter = Some(adapter);
        self.corrector.reset();
        Ok(())
    }

    pub fn detach_adapter(&mut self) -> Option<Box<dyn ItemAdapter>> {
        self.adapter.take()
    }

    pub fn adapter(&self) -> Option<&dyn ItemAdapter> {
        self.adapter.as_deref()
    }

    pub fn adapter_mut(&mut self) -> Option<&mut (dyn ItemAdapter + 'static)> {
        self.adapter.as_deref_mut()
    }

    pub fn item_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, |a| a.item_count())
    }

    /// The adapter's selected index, if an adapter is attached.
    pub fn current_index(&self) -> Option<usize> {
        self.adapter
            .as_ref()
            .and_then(|a| a.selection())
            .map(|s| s.current_index())
    }

    /// Reports that the list now holds `count` items.
    ///
    /// Returns the adapter's item count afterwards; hosts lay out that many items. A selection
    /// left past the end is moved to the last item.
    pub fn on_data_changed(&mut self, count: usize) -> usize {
        let Some(adapter) = self.adapter.as_deref_mut() else {
            return 0;
        };
        adapter.set_item_count(count);
        let actual = adapter.item_count();
        if actual != count {
            cwarn!(requested = count, actual, "adapter kept its own item count");
        }
        if let Some(selection) = adapter.selection_mut() {
            let index = selection.current_index();
            if actual > 0 && index >= actual {
                selection.on_item_selected(actual - 1);
            }
        }
        actual
    }

    /// Reports the viewport extent measured by the host (along the scroll axis).
    ///
    /// A changed extent invalidates the measurements; the expected item extent is then
    /// remeasured and both are recorded again.
    pub fn on_measured(&mut self, viewport_extent: i32) -> Result<()> {
        let extent = non_negative("viewport extent", viewport_extent)?;
        if self.tracker.viewport().is_resize(extent) {
            ctrace!(
                from = self.tracker.viewport().extent,
                to = extent,
                "viewport resized"
            );
            self.tracker.invalidate();
            self.measurements_dirty = true;
        }

        if self.measurements_dirty {
            let item_extent = (self.options.item_extent)();
            self.tracker.set_measurements(viewport_extent, item_extent)?;
            self.measurements_dirty = false;
        }
        Ok(())
    }

    /// Forces the item extent to be remeasured on the next [`Self::on_measured`].
    ///
    /// Useful when the data changes in a way that changes item sizes but not the viewport.
    pub fn invalidate_measurements(&mut self) {
        self.tracker.invalidate();
        self.measurements_dirty = true;
    }

    /// Scrolls so that `index` ends up centred.
    ///
    /// `index` is clamped to the last item. Returns the tier that was used, or `None` when there
    /// are no items. An exact tier with a zero delta issues no scroll.
    pub fn request_scroll_to<H: ScrollHost + ?Sized>(
        &mut self,
        index: usize,
        host: &mut H,
    ) -> Option<CentringOffset> {
        let count = self.item_count();
        if count == 0 {
            ctrace!(index, "request_scroll_to: no items");
            return None;
        }
        let index = index.min(count - 1);
        let orientation = self.options.orientation;

        let materialized = host
            .materialized_item(index)
            .map(|item| item.materialized(orientation));
        let offset = self.tracker.compute_centring_offset(index, materialized);
        ctrace!(index, ?offset, "request_scroll_to");

        match offset {
            CentringOffset::Exact { delta } => {
                if delta != 0 {
                    let (dx, dy) = orientation.compose(delta);
                    host.smooth_scroll_by(dx, dy);
                }
            }
            CentringOffset::Approximate { index, offset } => {
                host.smooth_scroll_to_offset(index, offset);
            }
            CentringOffset::Default { index } => host.scroll_to_index(index),
        }
        Some(offset)
    }

    /// Re-centres the selected item after the arrangement of items changed (rotation, data
    /// change).
    ///
    /// The resulting scroll will settle and report the selection again.
    pub fn on_layout_changed<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Option<CentringOffset> {
        let index = self.current_index()?;
        self.request_scroll_to(index, host)
    }

    /// Forwards a scroll state reported by the host to the snap corrector.
    ///
    /// A settled item is reported to the adapter's selection. Indexes outside the adapter's item
    /// range are ignored (and debug-asserted).
    pub fn on_scroll_state_changed<H: ScrollHost + ?Sized>(
        &mut self,
        state: ScrollState,
        host: &mut H,
    ) -> Option<SettleOutcome> {
        let Self {
            corrector, adapter, ..
        } = self;

        let mut on_selected = |index: usize| {
            let Some(adapter) = adapter.as_deref_mut() else {
                return;
            };
            let count = adapter.item_count();
            if index >= count {
                cwarn!(index, count, "settled on an out-of-bounds index");
                debug_assert!(
                    index < count,
                    "settled on an out-of-bounds index (i={index}, count={count})"
                );
                return;
            }
            if let Some(selection) = adapter.selection_mut() {
                selection.on_item_selected(index);
            }
        };

        corrector.on_scroll_state_changed(state, host, &mut on_selected)
    }

    /// Padding applied before the first and after the last item.
    pub fn edge_padding(&self) -> EdgePadding {
        if !self.options.edge_padding || self.item_count() == 0 {
            return EdgePadding::default();
        }
        let extent = self.tracker.edge_padding_extent();
        EdgePadding {
            leading: extent,
            trailing: extent,
        }
    }

    /// Per-item decoration: the first item gets the leading padding, the last the trailing one.
    pub fn edge_padding_for(&self, index: usize) -> EdgePadding {
        let count = self.item_count();
        if index >= count {
            return EdgePadding::default();
        }
        let padding = self.edge_padding();
        EdgePadding {
            leading: if index == 0 { padding.leading } else { 0 },
            trailing: if index + 1 == count {
                padding.trailing
            } else {
                0
            },
        }
    }
}

impl core::fmt::Debug for CentreSnap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CentreSnap")
            .field("options", &self.options)
            .field("tracker", &self.tracker)
            .field("corrector", &self.corrector)
            .field("measurements_dirty", &self.measurements_dirty)
            .field("item_count", &self.item_count())
            .field("current_index", &self.current_index())
            .finish()
    }
}
