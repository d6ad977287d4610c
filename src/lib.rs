//! Harmonize
//!
//! Batch palette harmony classification and OKLCH dataset export, built on
//! the `color-harmony` kernel.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
