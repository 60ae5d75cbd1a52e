//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

mod external;
mod indexing;
mod properties;

/// Install a logger that the test harness captures, once per test binary.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
