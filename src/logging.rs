//! Structured logging setup.
//!
//! The library only emits `tracing` events; binaries call [`init_tracing`]
//! once at startup to install a subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging from command-line settings.
///
/// `RUST_LOG` or `ROADNET_LOG`, when set, override `verbose` and `log_level`.
/// Output goes to stderr, as compact text or as JSON lines.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ROADNET_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(qualify(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Scopes a bare level like `debug` to the library and the `roadnet` binary.
fn qualify(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("u_roadnet={level},roadnet={level}")
    }
}
