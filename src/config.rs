//! Configuration
//!
//! Settings are plain `clap` argument groups so a host binary can flatten
//! them into its own command line and pick them up from the environment.

use std::time::Duration;

use clap::Args;

/// Default delay before a finished submission may be retried.
pub const DEFAULT_RESUBMIT_DELAY_MS: u64 = 2_000;

/// Default notification shown after a successful submission.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Item added successfully!";

/// Default notification shown when a submission fails for infrastructure reasons.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Item form settings.
#[derive(Debug, Clone, Args)]
pub struct FormConfig {
    /// Milliseconds before submission is re-enabled after an upload or save attempt
    #[arg(
        long,
        env = "ITEM_FORM_RESUBMIT_DELAY_MS",
        default_value_t = DEFAULT_RESUBMIT_DELAY_MS
    )]
    pub resubmit_delay_ms: u64,

    /// Notification shown after a successful submission
    #[arg(long, env = "ITEM_FORM_SUCCESS_MESSAGE", default_value = DEFAULT_SUCCESS_MESSAGE)]
    pub success_message: String,

    /// Notification shown when a submission fails
    #[arg(long, env = "ITEM_FORM_FAILURE_MESSAGE", default_value = DEFAULT_FAILURE_MESSAGE)]
    pub failure_message: String,
}

impl FormConfig {
    /// Delay before submission is re-enabled.
    pub fn resubmit_delay(&self) -> Duration {
        Duration::from_millis(self.resubmit_delay_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            resubmit_delay_ms: DEFAULT_RESUBMIT_DELAY_MS,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_owned(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        form: FormConfig,
    }

    #[test]
    fn defaults_match_parsed_defaults() {
        let parsed = Harness::parse_from(["harness"]).form;
        let default = FormConfig::default();

        assert_eq!(parsed.resubmit_delay_ms, default.resubmit_delay_ms);
        assert_eq!(parsed.success_message, default.success_message);
        assert_eq!(parsed.failure_message, default.failure_message);
    }

    #[test]
    fn resubmit_delay_is_configurable() {
        let parsed = Harness::parse_from(["harness", "--resubmit-delay-ms", "250"]).form;

        assert_eq!(parsed.resubmit_delay(), Duration::from_millis(250));
    }
}
