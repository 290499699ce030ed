//! Demonstration commands behind the `ordgraph` binary.

pub mod commands;
