use centresnap::{CentreSnap, CentringOffset, Result, SettleOutcome};

use crate::StripHost;

/// A framework-neutral controller that wires a [`CentreSnap`] to a [`StripHost`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` when the container is measured (and after rotation)
/// - `drag_by` / `release` / `fling` for user input
/// - `tick(now_ms)` each frame/timer tick while animating
///
/// Every call forwards the host's queued scroll states to the snap corrector in delivery order,
/// including the states produced by the corrections themselves.
#[derive(Debug)]
pub struct Controller {
    snap: CentreSnap,
    host: StripHost,
    last_settle: Option<SettleOutcome>,
    corrections: usize,
}

impl Controller {
    pub fn new(snap: CentreSnap, host: StripHost) -> Self {
        Self {
            snap,
            host,
            last_settle: None,
            corrections: 0,
        }
    }

    pub fn snap(&self) -> &CentreSnap {
        &self.snap
    }

    pub fn snap_mut(&mut self) -> &mut CentreSnap {
        &mut self.snap
    }

    pub fn host(&self) -> &StripHost {
        &self.host
    }

    pub fn into_parts(self) -> (CentreSnap, StripHost) {
        (self.snap, self.host)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.snap.current_index()
    }

    pub fn is_animating(&self) -> bool {
        self.host.is_animating()
    }

    /// The most recent settle, if any.
    pub fn last_settle(&self) -> Option<SettleOutcome> {
        self.last_settle
    }

    /// Number of correction scrolls issued by settles so far.
    pub fn corrections(&self) -> usize {
        self.corrections
    }

    /// Call this when the container is measured.
    ///
    /// Updates the measurements and the edge padding, then re-centres the selected item as for
    /// any layout change.
    pub fn on_viewport_size(&mut self, width: u32, height: u32) -> Result<Option<CentringOffset>> {
        self.host.set_viewport_size(width, height);
        let extent = self.host.orientation().main(width, height);
        self.snap
            .on_measured(i32::try_from(extent).unwrap_or(i32::MAX))?;
        Ok(self.on_layout_changed())
    }

    /// Call this after the items changed (count or sizes).
    ///
    /// The new count is passed to the attached adapter; the host then lays out as many items as
    /// the adapter reports.
    pub fn on_data_changed(&mut self, count: usize) -> Option<CentringOffset> {
        let count = self.snap.on_data_changed(count);
        self.host.set_count(count);
        self.on_layout_changed()
    }

    fn on_layout_changed(&mut self) -> Option<CentringOffset> {
        self.host.set_padding(self.snap.edge_padding());
        let offset = self.snap.on_layout_changed(&mut self.host);
        self.dispatch();
        offset
    }

    /// Scrolls `index` to the centre.
    pub fn scroll_to(&mut self, index: usize) -> Option<CentringOffset> {
        let offset = self.snap.request_scroll_to(index, &mut self.host);
        self.dispatch();
        offset
    }

    pub fn drag_by(&mut self, delta: i64) {
        self.host.drag_by(delta);
        self.dispatch();
    }

    pub fn release(&mut self) {
        self.host.release();
        self.dispatch();
    }

    pub fn fling(&mut self, distance: i64) {
        self.host.fling(distance);
        self.dispatch();
    }

    /// Advances the host's animation and processes the resulting scroll states.
    ///
    /// Returns the scroll offset after the tick.
    pub fn tick(&mut self, now_ms: u64) -> i64 {
        let offset = self.host.tick(now_ms);
        self.dispatch();
        offset
    }

    fn dispatch(&mut self) {
        loop {
            let states = self.host.take_state_changes();
            if states.is_empty() {
                break;
            }
            for state in states {
                if let Some(outcome) = self.snap.on_scroll_state_changed(state, &mut self.host) {
                    if outcome.corrected {
                        self.corrections += 1;
                    }
                    self.last_settle = Some(outcome);
                }
            }
        }
    }
}
