//! Casematch - an ordered, mutable first-match evaluator.
//!
//! A `Matcher` holds `(condition, outcome)` cases in insertion order plus a
//! default outcome. `Matcher::eval` returns the outcome of the first case
//! whose condition accepts the input, or the default when none does.
//!
//! ```text
//! let mut m = Matcher::default();
//! m.case(Condition::when(|n| n.as_int().is_some_and(|n| n % 15 == 0)), "FizzBuzz")
//!     .case(Condition::when(|n| n.as_int().is_some_and(|n| n % 5 == 0)), "Buzz")
//!     .case(Condition::when(|n| n.as_int().is_some_and(|n| n % 3 == 0)), "Fizz")
//!     .set_default(Outcome::computed(Value::clone));
//!
//! let ids: Vec<_> = m.ids().collect();
//! m.remove(ids[0]);
//! ```
//!
//! # Identities
//!
//! Every appended case receives a fresh `PatternId`. Identities are the only
//! handle on an existing case (`get_pattern`, `remove`) and are never reused.
//!
//! # Threading
//!
//! `Matcher` does no locking. Mutation takes `&mut self`, so sharing one
//! across threads means wrapping it in a lock of the caller's choosing.

mod case;
mod errors;
mod identity;
mod matcher;

use std::sync::Once;

pub use casematch_value::{Callable, EvalError, EvalErrorKind, EvalResult, Value};
pub use case::{Case, Condition, Outcome};
pub use errors::FieldsError;
pub use identity::PatternId;
pub use matcher::{Matcher, DEFAULT_KEY};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times, and a no-op
/// when the application already installed a global subscriber.
/// Enable with `RUST_LOG=casematch=debug` or `RUST_LOG=casematch=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set. A subscriber installed by the
        // host application takes precedence.
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("global subscriber already set, keeping it");
            }
        }
    });
}
