//! Core domain types for Capsule.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies: cache keys derived from call arguments, and validated
//! configuration types for the stateful handles and the debouncer.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod config;
mod key;

pub use config::{AccountConfig, ConfigError, CounterConfig, DebounceConfig};
pub use key::{CacheKey, KeyError};
