//! Capsule core: private-state handles, memoization, and debouncing.
//!
//! Three independent, composable pieces:
//!
//! - **Handles** ([`Counter`], [`BankAccount`], [`ShoppingList`],
//!   [`Calculator`], [`Once`]): constructors return an opaque value that
//!   exclusively owns its mutable state. Independence between instances is
//!   by construction - there is no shared state to protect, so there are no
//!   locks. Container-typed reads return cloned snapshots, never references
//!   into private state.
//! - **Memoization** ([`Memo`], [`RecursiveMemo`]): wraps a function with a
//!   key-addressed, unbounded cache. Keys come from
//!   [`capsule_types::CacheKey`], so same-value argument lists always share
//!   an entry and distinct ones never do.
//! - **Debouncing** ([`Debouncer`], [`TaskDebouncer`]): coalesces bursts of
//!   calls into a single deferred invocation carrying the last call's
//!   arguments. The state machine is synchronous and clock-agnostic; the
//!   task-backed variant drives it with tokio timers.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod account;
mod calculator;
mod counter;
mod debounce;
mod list;
mod memo;
mod once;

pub use account::{AccountError, BankAccount};
pub use calculator::{CalcError, Calculator};
pub use counter::Counter;
pub use debounce::{Debouncer, TaskDebouncer};
pub use list::ShoppingList;
pub use memo::{Memo, RecursiveMemo};
pub use once::Once;
