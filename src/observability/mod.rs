//! Observability module for HallPointer.

pub mod metrics;
