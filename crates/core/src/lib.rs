//! Core traits for scalar root finding.
//!
//! This crate defines the shared abstractions the solvers and observers build on:
//!
//! - [`Function`] — a scalar function `f64 -> f64` that may fail
//! - [`Fallible`] — adapts a `Fn(f64) -> Result<f64, E>` closure into a [`Function`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Fallible, Function};
pub use observer::Observer;
