//! Core traits and types for the Meander optimisers.
//!
//! This crate defines the contracts that optimisers and the things they
//! optimise build on:
//!
//! - [`Element`] — an opaque numeric value with arithmetic, ordering, and a
//!   constant factory ([`Element::constant`])
//! - [`Target`] — a mutable object exposing parameters, bounds, and a residual
//! - [`Observer`] — receives optimiser events and optionally returns control
//!   actions

mod element;
mod observer;
mod target;

pub use element::{Element, InvalidFormat, Literal};
pub use observer::Observer;
pub use target::Target;
