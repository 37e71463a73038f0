//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the settings file. `--verbose` adds debug output for
//! this tool and the client library on top of whatever filter is active.
//! Log lines go to stderr so `--format json` output stays parseable.

use anyhow::Result;
use skinny_legend_core::config::{LogFormat, LoggingSettings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const VERBOSE_DIRECTIVES: [&str; 3] = [
    "skinny_legend=debug",
    "skinny_legend_api_client=debug",
    "skinny_legend_core=debug",
];

/// Install the global subscriber
pub fn init(settings: &LoggingSettings, verbose: bool) -> Result<()> {
    let filter = build_filter(&settings.level, verbose)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match settings.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .json()
                    .with_current_span(true),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {e}"))
}

fn build_filter(level: &str, verbose: bool) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| anyhow::anyhow!("Invalid log level '{level}': {e}"))?;

    if verbose {
        for directive in VERBOSE_DIRECTIVES {
            filter = filter.add_directive(directive.parse()?);
        }
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_builds() {
        let filter = build_filter("warn", true).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("skinny_legend_api_client=debug"));
    }

    #[test]
    fn test_quiet_filter_builds() {
        assert!(build_filter("info", false).is_ok());
    }
}
