//! Tracing configuration for the registration wizard.
//!
//! ## Behavior / 行为
//!
//! - **Development**: debug level for the wizard crates
//! - **Release**: info level
//! - `RUST_LOG` overrides both
//!
//! Output goes to stderr; stdout is reserved for snapshot JSON.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        "warn".to_string(),
        format!("registration_wizard={level}"),
        format!("registration_wizard_lib={level}"),
        format!("rw_app={level}"),
        format!("rw_infra={level}"),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Call once, before the orchestrator is built.
///
/// # Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // "2026-10-18 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
