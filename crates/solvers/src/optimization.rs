//! Optimisers that minimize a target's residual.
//!
//! A [`Target`] exposes a parameter vector, optional bounds, and a residual
//! recomputed from the parameters. Optimisers in this module adjust the
//! parameters in place to make the residual as small as they can.
//!
//! # Optimisers
//!
//! - [`random_descent`] — derivative-free coordinate search in random order,
//!   run in the background
//!
//! [`Target`]: meander_core::Target

pub mod random_descent;
