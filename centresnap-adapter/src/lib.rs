//! Adapter utilities for the `centresnap` crate.
//!
//! The `centresnap` crate is UI-agnostic and only talks to its host through traits. This crate
//! provides small, framework-neutral pieces commonly needed by adapters:
//!
//! - A reference host (`StripHost`) that lays items out along one axis and reports scroll states
//! - Tween-based smooth scrolling helpers
//! - A `Controller` that forwards host events to a `CentreSnap` in delivery order
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod strip_host;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use strip_host::StripHost;
pub use tween::{Easing, Tween};
