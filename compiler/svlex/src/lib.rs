//! SystemVerilog lexer driver.
//!
//! Library half of the `svlex` binary: command handlers and the shared
//! error type, kept here so they can be tested without spawning a process.

pub mod commands;
mod error;

use std::sync::Once;

pub use error::DriverError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Call this once at the start of the program. Only installs a subscriber
/// when `RUST_LOG` is set, so normal runs pay nothing.
///
/// Example: `RUST_LOG=sv_lexer=trace svlex lex top.sv`
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
