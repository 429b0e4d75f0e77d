//! Trains Core Library
//!
//! Route graph, trip search and result ordering for the trains CLI.

pub mod config;
pub mod error;
pub mod explorer;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
pub mod trip;
