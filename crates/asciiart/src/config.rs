//! Runtime configuration for the editor binary.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. [`AppConfig::default`]
//! 2. Environment variables ([`AppConfig::from_env`])
//! 3. Command-line flags ([`AppConfig::with_cli_overrides`])

/// Filter used when neither `ASCIIART_LOG` nor `--log-filter` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const ENV_LOG_FILTER: &str = "ASCIIART_LOG";
pub const ENV_LOG_JSON: &str = "ASCIIART_LOG_JSON";
pub const ENV_NO_MENU: &str = "ASCIIART_NO_MENU";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
    /// Emit logs as JSON lines instead of the human-readable format.
    pub log_json: bool,
    /// Print the menu banner before every command.
    /// Disabled for scripted input where the banner is noise.
    pub show_menu: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
            show_menu: true,
        }
    }
}

impl AppConfig {
    /// Load config from environment variables.
    ///
    /// Reads:
    /// - `ASCIIART_LOG`: log filter directives (e.g. `debug`, `asciiart_core=trace`)
    /// - `ASCIIART_LOG_JSON`: `1`/`true`/`yes` for JSON log lines
    /// - `ASCIIART_NO_MENU`: `1`/`true`/`yes` to hide the menu banner
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(ENV_LOG_FILTER)
            && !filter.trim().is_empty()
        {
            config.log_filter = filter;
        }

        if let Some(val) = lookup(ENV_LOG_JSON) {
            config.log_json = is_truthy(&val);
        }

        if let Some(val) = lookup(ENV_NO_MENU) {
            config.show_menu = !is_truthy(&val);
        }

        config
    }

    /// Apply flags given on the command line. `None`/`false` leave the
    /// current value alone.
    #[must_use]
    pub fn with_cli_overrides(
        mut self,
        log_filter: Option<String>,
        log_json: bool,
        no_menu: bool,
    ) -> Self {
        if let Some(filter) = log_filter {
            self.log_filter = filter;
        }
        if log_json {
            self.log_json = true;
        }
        if no_menu {
            self.show_menu = false;
        }
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
