//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod device_form;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use chart::TelemetryChart;
pub use device_form::AddDeviceDialog;
pub use loading::{CardSkeleton, Loading};
pub use nav::Nav;
pub use stat_card::StatSummary;
pub use toast::Toast;
