#![cfg(test)]

//! Test logging for the crate's unit tests.
//!
//! Delegates to `client_test_support::logging` so unit and integration tests
//! share one initializer and one filter (`TEST_LOG`, then `RUST_LOG`, then
//! quiet apart from transition events).
//!
//! ```bash
//! TEST_LOG=debug cargo test -p client transition
//! ```

/// Idempotent; the `ctor` hook in `lib.rs` already calls it once per binary.
pub fn init() {
    client_test_support::logging::init();
}
