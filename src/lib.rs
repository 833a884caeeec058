//! # Twine HX Explorer
//!
//! Thermal performance engine and configuration store behind an interactive
//! heat exchanger visualizer, built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: The exchanger performance model and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_hx_explorer::models::thermal::exchanger::{
//!     Configuration, MaterialKind, compute_performance,
//! };
//!
//! let result = compute_performance(&Configuration::default(), &MaterialKind::Copper.material())?;
//! for sample in &result.temperature_profile {
//!     println!("{}: {} / {}", sample.distance_index, sample.hot_celsius, sample.cold_celsius);
//! }
//! # Ok::<(), twine_hx_explorer::models::thermal::exchanger::DomainError>(())
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
