//! UI-free building blocks of the results engine.

pub mod classify;
pub mod config;
pub mod format;
pub mod metrics;
pub mod rotation;
pub mod store;
pub mod timing;
