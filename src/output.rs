//! # Output Configuration
//!
//! Controls the appearance of CLI output. Status symbols (emoji) are only
//! used when color output is appropriate; otherwise plain ASCII tags keep
//! logs and CI output readable.
//!
//! Honors the usual conventions: the `--color=always|never|auto` flag,
//! `NO_COLOR` (https://no-color.org/), `CLICOLOR=0`, `CLICOLOR_FORCE`,
//! `TERM=dumb`, and TTY detection via the `console` crate.

use std::env;

/// Output configuration for colors and status symbols.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the environment and the global
    /// `--color` flag ("always", "never", or "auto").
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // presence of NO_COLOR disables colors even when empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Pick the status symbol: the emoji when colors are on, the plain tag
    /// otherwise.
    pub fn symbol<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
