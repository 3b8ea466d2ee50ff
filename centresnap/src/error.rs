use thiserror::Error;

/// Configuration errors surfaced to the caller.
///
/// Missing geometry is never an error: centring degrades through its tiers instead, and a
/// settle with nothing under the viewport centre is a no-op.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("attached adapter does not expose a selection (current index / on_item_selected)")]
    NonConformingAdapter,

    #[error("adapter selection {index} is out of bounds for {count} items")]
    SelectionOutOfBounds { index: usize, count: usize },

    #[error("{what} must be non-negative (got {value})")]
    NegativeMeasurement { what: &'static str, value: i32 },
}

pub type Result<T> = core::result::Result<T, Error>;
