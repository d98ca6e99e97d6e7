//! Reusable view components.

pub mod chart;

pub use chart::{ChartConfig, ChartKind, Dataset};
