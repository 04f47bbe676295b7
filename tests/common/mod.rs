//! Shared harness for the ansi_rgb integration tests.
//!
//! The crate itself only emits `log` records: a debug line when a palette is
//! built or a style name is dropped, and a trace line per quantized color.
//! `init_test_logging` installs a tracing subscriber that picks those records
//! up next to the tests' own `tracing` events.
//!
//! ```rust,ignore
//! mod common;
//!
//! #[test]
//! fn quantizes_orange() {
//!     common::init_test_logging();
//!     assert_eq!(Colorizer::new().quantize("ff8700").unwrap(), 208);
//! }
//! ```
//!
//! Filters:
//!
//! - `RUST_LOG=ansi_rgb=debug` - palette construction and dropped styles (default)
//! - `RUST_LOG=ansi_rgb::quantize=trace` - input, snapped color and index for every lookup
//! - `TEST_LOG_JSON=1` - one JSON object per event
//!
//! Each test binary uses a different subset of the helpers.

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the subscriber once per test binary; later calls do nothing.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ansi_rgb=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_thread_ids(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// Group the events of one step (build, quantize, emit) under a span.
///
/// ```rust,ignore
/// let _setup = test_phase("setup");
/// ```
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// Record which test is running and what it covers.
pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(
        test_name = test_name,
        description = description,
        "test context"
    );
}
