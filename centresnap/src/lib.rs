//! A headless centre-snapping engine for scrollable lists.
//!
//! For a reference host and a frame-driven controller, see the `centresnap-adapter` crate.
//!
//! As the user scrolls, the item under the viewport's centre is the selected one; once scrolling
//! settles, the list corrects itself so that item is exactly centred. This crate holds the parts
//! that are easy to get wrong: measurement-aware centring (exact → approximate → plain scroll)
//! and the scroll state machine that issues at most one correction per settle, with a dead-zone
//! so odd/even size mismatches cannot loop forever.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size and scroll state changes
//! - geometry of the items currently on screen (see [`GeometryProvider`])
//! - smooth-scroll primitives (see [`ScrollSink`])
//! - an item adapter that owns the selection (see [`ItemAdapter`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod centre_snap;
mod corrector;
mod error;
mod host;
mod options;
mod selection;
mod state;
mod tracker;
mod types;


pub use centre_snap::CentreSnap;
pub use corrector::{SNAP_THRESHOLD_PIXELS, SnapCorrector};
pub use error::{Error, Result};
pub use host::{GeometryProvider, ItemAdapter, ScrollHost, ScrollSink, SelectionSink};
pub use options::{CentreSnapOptions, ItemExtentProvider};
pub use selection::{OnSelectionChanged, Selection, SnapAdapter};
pub use state::Viewport;
pub use tracker::MeasurementTracker;
pub use types::{
    CentringOffset, EdgePadding, ItemGeometry, MaterializedItem, Orientation, Point, ScrollState,
    SettleOutcome,
};
