//! Thermal systems models.
//!
//! This module contains models for thermal systems, starting with heat
//! exchanger performance rating.

pub mod exchanger;
