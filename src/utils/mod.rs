//! Numerical utilities shared across modules.

pub mod optimization;

pub use optimization::{brent_minimize, BrentConfig, BrentResult};
