//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.
//!
//! - [`constraint`]: Type-level numeric bounds checked at construction.
//! - [`hx`]: Heat exchanger rating building blocks.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod hx;
pub mod units;
