//! Helpers for asserting on panics raised by code under test.
//!
//! `#[should_panic]` only checks a substring of one message per test. These
//! helpers return the message so a single test can check several calls, for
//! example every row of an `rstest` case table.
//!
//! # Examples
//!
//! ```
//! use outcome_test_helpers::panic::panic_message;
//!
//! let message = panic_message(|| panic!("boom")).expect("closure panics");
//! assert_eq!(message, "boom");
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use anyhow::{Result, anyhow, bail};

/// Runs `f`, expecting it to panic, and returns the panic message.
///
/// # Errors
///
/// Returns an error if `f` returns normally or panics with a payload that is
/// not a string.
pub fn panic_message<F, R>(f: F) -> Result<String>
where
    F: FnOnce() -> R,
{
    let Err(payload) = catch_unwind(AssertUnwindSafe(f)) else {
        bail!("expected a panic, but the closure returned normally");
    };
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&'static str>().map(|msg| (*msg).to_owned()))
        .ok_or_else(|| anyhow!("panic payload was not a string"))
}
