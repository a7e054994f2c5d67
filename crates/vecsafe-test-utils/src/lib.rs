//! Test utilities for vecsafe development.
//!
//! Provides the scenario sequences used across integration tests,
//! proptest strategies for sequences and indices, and a one-shot
//! [`init_tracing`] so rejected-call trace events show up in captured
//! test output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub use fixtures::{empty_sequence, scenario_sequence};

static TRACING: Once = Once::new();

/// Filter used when `RUST_LOG` is unset. The library only emits `TRACE`
/// events, so anything coarser would hide all of them.
pub const DEFAULT_FILTER: &str = "warn,vecsafe_core=trace";

/// Install a fmt subscriber filtered by `RUST_LOG`, or [`DEFAULT_FILTER`]
/// when it is unset.
///
/// Safe to call from every test; only the first call installs anything,
/// and an already-installed global subscriber is left in place.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
