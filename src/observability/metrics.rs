//! Metric names recorded by the logic layer.
//!
//! No recorder is installed by the binary; an embedding application can
//! install one to collect these.

pub const METRIC_COMMANDS_TOTAL: &str = "hallpointer_commands_total";
pub const METRIC_PARSE_ERRORS_TOTAL: &str = "hallpointer_parse_errors_total";
pub const METRIC_COMMAND_ERRORS_TOTAL: &str = "hallpointer_command_errors_total";
pub const METRIC_COMMAND_LATENCY: &str = "hallpointer_command_latency_seconds";
pub const METRIC_MEMBERS_TOTAL: &str = "hallpointer_members_total";
