//! Reusable observers for the Tangent root finder.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! route a solver's per-iteration side channel to an injectable sink instead
//! of a hard-wired console stream.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver events
//!   ([`HasIteration`], [`HasResidual`], [`HasStep`])
//!
//! # Observers
//!
//! - [`LogObserver`] — emits one [`tracing`] event per iteration
//! - [`History`] — records every iterate for later inspection
//!
//! [`Observer`]: tangent_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep

pub mod traits;

mod history;
mod logging;

pub use history::{History, Iterate};
pub use logging::LogObserver;
