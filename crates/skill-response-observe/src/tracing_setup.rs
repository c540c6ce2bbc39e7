//! Tracing subscriber initialization with structured logging.
//!
//! # Usage
//!
//! ```no_run
//! let filter = skill_response_observe::tracing_setup::filter_for_verbosity(1, false);
//! skill_response_observe::tracing_setup::init_tracing(filter).unwrap();
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Map CLI verbosity flags to a default filter directive.
pub fn filter_for_verbosity(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,skill_response=debug,skresp=debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber.
///
/// - Installs a structured `fmt` layer writing to stderr, so stdout stays
///   free for emitted JSON.
/// - `RUST_LOG` wins over `default_filter` when set.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(default_filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(0, true), "error");
        assert_eq!(filter_for_verbosity(0, false), "warn");
        assert_eq!(filter_for_verbosity(1, false), "info,skill_response=debug,skresp=debug");
        assert_eq!(filter_for_verbosity(1, true), "info,skill_response=debug,skresp=debug");
        assert_eq!(filter_for_verbosity(4, false), "trace");
    }

    #[test]
    fn test_filters_parse() {
        for filter in ["error", "warn", "info,skill_response=debug,skresp=debug", "trace"] {
            assert!(EnvFilter::try_new(filter).is_ok(), "bad filter {filter}");
        }
    }
}
