//! Reusable observers for the rootfind solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `rootfind-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIterate`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records every iteration for later inspection
//! - [`LogObserver`] — forwards every iteration to the `log` facade
//! - [`ResidualBelow`] — stops a solver once the residual is small enough
//!
//! [`Observer`]: rootfind_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logger;
mod stop;

pub use history::{History, Record};
pub use logger::LogObserver;
pub use stop::ResidualBelow;
