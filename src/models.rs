//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic lives. The model module re-exports
//! the types callers need and provides the [`twine_core::Model`] adapter as a
//! thin wrapper that delegates to `core`.

pub mod thermal;
