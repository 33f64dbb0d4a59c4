//! Backend-facing crate for Greenwave: the optimization result schema, request
//! payloads and the HTTP client for the evaluation service.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod request;

pub use client::{batch_from_value, single_from_value, EvaluationClient};
pub use config::ApiConfig;
pub use error::{FetchError, InputError};
pub use model::{
    improvement_pct, CongestionLevel, Impact, OptimizationResult, ResultBatch, SignalTiming,
};
pub use request::{parse_sensor_count, SensorReading};
