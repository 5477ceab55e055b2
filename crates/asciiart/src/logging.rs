use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// Install the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
///
/// # Errors
///
/// [`AppError::Logging`] when the filter directives do not parse or a global
/// subscriber is already installed.
pub fn init(config: &AppConfig) -> Result<()> {
    let filter = build_filter(&config.log_filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| AppError::logging(e.to_string()))
}

fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| AppError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(build_filter(&AppConfig::default().log_filter).is_ok());
    }

    #[test]
    fn per_crate_directives_parse() {
        assert!(build_filter("asciiart=debug,asciiart_core=trace").is_ok());
    }

    #[test]
    fn malformed_directive_is_a_logging_error() {
        let err = build_filter("asciiart=notalevel").expect_err("bad level");
        assert!(matches!(err, AppError::Logging { .. }));
    }
}
