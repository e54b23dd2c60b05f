//! Reusable observers for the Meander optimisers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across optimisers without naming their event or action types.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-optimiser observers
//!   ([`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopBelow`] — stops a run once the residual falls below a threshold
//! - [`History`] — records the residual carried by every event
//!
//! [`Observer`]: meander_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

mod history;
mod stop_below;
pub mod traits;

pub use history::History;
pub use stop_below::StopBelow;
