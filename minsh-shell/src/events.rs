//! Selection and initialization of tracing output.

use std::{collections::HashSet, fmt::Display};

use minsh_core::trace_categories;
use tracing_subscriber::{Layer, filter::Targets, layer::SubscriberExt, util::SubscriberInitExt};

/// Trace category for reading and tokenizing input lines.
pub const INPUT: &str = "input";

/// Type of event to trace.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceEvent {
    /// Traces command classification and execution.
    #[clap(name = "commands")]
    Commands,
    /// Traces input lines and their tokens.
    #[clap(name = "input")]
    Input,
    /// Traces spawning and reaping of child processes.
    #[clap(name = "jobs")]
    Jobs,
    /// Traces signal disposition changes.
    #[clap(name = "signals")]
    Signals,
}

impl Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Commands => write!(f, "commands"),
            Self::Input => write!(f, "input"),
            Self::Jobs => write!(f, "jobs"),
            Self::Signals => write!(f, "signals"),
        }
    }
}

impl TraceEvent {
    const fn target(self) -> &'static str {
        match self {
            Self::Commands => trace_categories::COMMANDS,
            Self::Input => INPUT,
            Self::Jobs => trace_categories::JOBS,
            Self::Signals => trace_categories::SIGNALS,
        }
    }
}

/// Builds the filter used for tracing output: INFO by default, DEBUG for the targets of
/// each enabled event.
pub fn compose_filter(enabled_events: &HashSet<TraceEvent>) -> Targets {
    Targets::new()
        .with_default(tracing_subscriber::filter::LevelFilter::INFO)
        .with_targets(
            enabled_events
                .iter()
                .map(|event| (event.target(), tracing::Level::DEBUG)),
        )
}

/// Initializes tracing output to standard error.
pub fn init(enabled_events: &HashSet<TraceEvent>) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(compose_filter(enabled_events));

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        // Something went wrong; proceed on anyway but complain audibly.
        eprintln!("warning: failed to initialize tracing.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn events_map_to_core_targets() {
        assert_eq!(TraceEvent::Commands.target(), "commands");
        assert_eq!(TraceEvent::Jobs.target(), "jobs");
        assert_eq!(TraceEvent::Signals.target(), "signals");
        assert_eq!(TraceEvent::Input.target(), INPUT);
    }

    #[test]
    fn filter_raises_enabled_targets_only() {
        let filter = compose_filter(&HashSet::from([TraceEvent::Jobs]));
        assert!(filter.would_enable("jobs", &tracing::Level::DEBUG));
        assert!(!filter.would_enable("commands", &tracing::Level::DEBUG));
        assert!(filter.would_enable("commands", &tracing::Level::INFO));
    }

    #[test]
    fn display_matches_value_names() {
        assert_eq!(TraceEvent::Signals.to_string(), "signals");
    }
}
