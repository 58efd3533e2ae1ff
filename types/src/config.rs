//! Validated configuration for handles and the debouncer.
//!
//! Raw deserialization structs (every option defaulted) stay private; the
//! public types are resolved at the parse boundary via `#[serde(try_from)]`.
//! Existence of a config value is the proof of its validity.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("counter step must not be zero")]
    ZeroStep,
    #[error("opening balance must be a finite, non-negative number (got {0})")]
    InvalidOpeningBalance(f64),
    #[error("debounce delay must not be negative (got {0} ms)")]
    NegativeDelay(i64),
}

// ============================================================================
// Counter
// ============================================================================

fn default_step() -> i64 {
    1
}

#[derive(Deserialize)]
struct RawCounterConfig {
    #[serde(default)]
    initial_value: i64,
    #[serde(default = "default_step")]
    step: i64,
}

/// Counter construction options.
///
/// Defaults: `initial_value = 0`, `step = 1`. A zero step would make
/// `increment`/`decrement` no-ops, so it is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCounterConfig")]
pub struct CounterConfig {
    initial_value: i64,
    step: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_value: 0,
            step: 1,
        }
    }
}

impl TryFrom<RawCounterConfig> for CounterConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCounterConfig) -> Result<Self, Self::Error> {
        Self::new(raw.initial_value, raw.step)
    }
}

impl CounterConfig {
    pub fn new(initial_value: i64, step: i64) -> Result<Self, ConfigError> {
        if step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        Ok(Self {
            initial_value,
            step,
        })
    }

    /// Config with the given starting value and the default step of 1.
    #[must_use]
    pub fn with_initial_value(initial_value: i64) -> Self {
        Self {
            initial_value,
            step: 1,
        }
    }

    #[must_use]
    pub fn initial_value(&self) -> i64 {
        self.initial_value
    }

    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }
}

// ============================================================================
// Bank account
// ============================================================================

#[derive(Deserialize)]
struct RawAccountConfig {
    #[serde(default)]
    opening_balance: f64,
}

/// Bank account construction options.
///
/// Default: `opening_balance = 0.0`. The opening balance must be finite and
/// non-negative; an account can never start in a corrupt state.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawAccountConfig")]
pub struct AccountConfig {
    opening_balance: f64,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            opening_balance: 0.0,
        }
    }
}

impl TryFrom<RawAccountConfig> for AccountConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAccountConfig) -> Result<Self, Self::Error> {
        Self::new(raw.opening_balance)
    }
}

impl AccountConfig {
    pub fn new(opening_balance: f64) -> Result<Self, ConfigError> {
        if !opening_balance.is_finite() || opening_balance < 0.0 {
            return Err(ConfigError::InvalidOpeningBalance(opening_balance));
        }
        Ok(Self { opening_balance })
    }

    #[must_use]
    pub fn opening_balance(&self) -> f64 {
        self.opening_balance
    }
}

// ============================================================================
// Debounce
// ============================================================================

fn default_delay_ms() -> i64 {
    250
}

#[derive(Deserialize)]
struct RawDebounceConfig {
    #[serde(default = "default_delay_ms")]
    delay_ms: i64,
}

/// Debounce delay, validated at construction time.
///
/// `Duration` cannot represent a negative delay, so the resolved type is
/// correct by construction; callers holding a raw millisecond count go
/// through `new`, which rejects negative values immediately rather than
/// deferring the failure to the first call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDebounceConfig")]
pub struct DebounceConfig {
    delay: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(250),
        }
    }
}

impl TryFrom<RawDebounceConfig> for DebounceConfig {
    type Error = ConfigError;

    fn try_from(raw: RawDebounceConfig) -> Result<Self, Self::Error> {
        Self::new(raw.delay_ms)
    }
}

impl DebounceConfig {
    pub fn new(delay_ms: i64) -> Result<Self, ConfigError> {
        let millis = u64::try_from(delay_ms).map_err(|_| ConfigError::NegativeDelay(delay_ms))?;
        Ok(Self {
            delay: Duration::from_millis(millis),
        })
    }

    #[must_use]
    pub fn from_delay(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
