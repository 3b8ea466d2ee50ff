use alloc::sync::Arc;

use crate::{ItemAdapter, SelectionSink};

/// A callback fired after the selected index changes through [`SelectionSink::on_item_selected`].
pub type OnSelectionChanged = Arc<dyn Fn(usize) + Send + Sync>;

/// The single source of truth for the currently selected index.
///
/// The index is only ever written by [`SelectionSink::on_item_selected`]; the listener sees
/// every notification, including re-selection of the same index.
#[derive(Clone, Default)]
pub struct Selection {
    current: usize,
    on_change: Option<OnSelectionChanged>,
}

impl Selection {
    pub fn new(current: usize) -> Self {
        Self {
            current,
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, on_change: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(usize) + Send + Sync + 'static>) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }
}

impl SelectionSink for Selection {
    fn current_index(&self) -> usize {
        self.current
    }

    fn on_item_selected(&mut self, index: usize) {
        self.current = index;
        if let Some(cb) = &self.on_change {
            cb(index);
        }
    }
}

impl core::fmt::Debug for Selection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Selection")
            .field("current", &self.current)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}

/// A ready-made adapter: an item count plus a [`Selection`].
///
/// Rendering adapters usually embed a `Selection` and implement [`ItemAdapter`] themselves; this
/// type covers the common case where the centring container only needs the count.
#[derive(Clone, Debug, Default)]
pub struct SnapAdapter {
    count: usize,
    selection: Selection,
}

impl SnapAdapter {
    pub fn new(count: usize, current: usize) -> Self {
        Self {
            count,
            selection: Selection::new(current),
        }
    }

    pub fn with_selection(count: usize, selection: Selection) -> Self {
        Self { count, selection }
    }

    /// Items are append-only during a session.
    pub fn append(&mut self, additional: usize) {
        self.count = self.count.saturating_add(additional);
    }
}

impl ItemAdapter for SnapAdapter {
    fn item_count(&self) -> usize {
        self.count
    }

    fn set_item_count(&mut self, count: usize) {
        self.count = count;
    }

    fn selection(&self) -> Option<&dyn SelectionSink> {
        Some(&self.selection)
    }

    fn selection_mut(&mut self) -> Option<&mut dyn SelectionSink> {
        Some(&mut self.selection)
    }
}
