//! Derivative-free optimisers for the Meander framework.
//!
//! Optimisers work through the contracts in [`meander_core`]: they compute
//! with [`Element`](meander_core::Element) values only, and mutate a
//! [`Target`](meander_core::Target) through its parameter accessors.

pub mod optimization;
