//! HTTP API
//!
//! Typed clients and DTOs for the telemetry and chat services.

pub mod client;
pub mod types;

pub use client::{ChatApi, TelemetryApi};
pub use types::{ChatResponse, Device, DeviceStats, TelemetryPoint};
