//! Dashboard Page
//!
//! One panel per device, pairing its telemetry chart with its 24h stat
//! summary. Stats and telemetry are fetched for all devices concurrently
//! and joined once every request has settled; each device keeps its own
//! outcome, so one failing device never blanks the others.

use std::collections::HashMap;

use futures_util::future::{join, join_all};
use leptos::*;
use leptos_router::*;

use crate::api::client::TelemetryApi;
use crate::api::types::{Device, DeviceStats, TelemetryPoint};
use crate::components::{CardSkeleton, Loading, StatSummary, TelemetryChart};
use crate::state::requests::Generation;

/// Per-device join outcome: each source settles independently.
#[derive(Clone, Debug, PartialEq)]
pub struct DevicePanel {
    pub stats: Result<DeviceStats, String>,
    pub telemetry: Result<Vec<TelemetryPoint>, String>,
}

impl DevicePanel {
    /// First failure message, if any source failed.
    pub fn failure(&self) -> Option<&str> {
        match (&self.stats, &self.telemetry) {
            (Err(message), _) => Some(message),
            (_, Err(message)) => Some(message),
            _ => None,
        }
    }
}

/// Index settled per-device results by device id. `stats` and `telemetry`
/// are positionally aligned with `devices`.
pub fn merge_panels(
    devices: &[Device],
    stats: Vec<Result<DeviceStats, String>>,
    telemetry: Vec<Result<Vec<TelemetryPoint>, String>>,
) -> HashMap<i64, DevicePanel> {
    devices
        .iter()
        .zip(stats.into_iter().zip(telemetry))
        .map(|(device, (stats, telemetry))| (device.id, DevicePanel { stats, telemetry }))
        .collect()
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let api = use_context::<TelemetryApi>().expect("TelemetryApi not found");

    let (devices, set_devices) = create_signal(Vec::<Device>::new());
    let (panels, set_panels) = create_signal(HashMap::<i64, DevicePanel>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let generation = Generation::new();

    let fetch_dashboard = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let tag = generation.begin();
            set_loading.set(true);

            spawn_local(async move {
                let fetched = match api.fetch_devices().await {
                    Ok(fetched) => fetched,
                    Err(e) => {
                        // Without the device list there is nothing to key
                        // panels by, so this failure blanks the whole view.
                        if generation.is_current(tag) {
                            set_error.set(Some(e));
                            set_loading.set(false);
                        }
                        return;
                    }
                };

                // Fan out stats and telemetry for every device at once, then
                // wait for all of them to settle.
                let stats_futures = fetched.iter().map(|device| api.fetch_stats(device.id));
                let telemetry_futures = fetched.iter().map(|device| api.fetch_telemetry(device.id));
                let (stats, telemetry) =
                    join(join_all(stats_futures), join_all(telemetry_futures)).await;

                if !generation.is_current(tag) {
                    return;
                }

                let merged = merge_panels(&fetched, stats, telemetry);
                for (id, panel) in &merged {
                    if let Some(message) = panel.failure() {
                        web_sys::console::error_1(
                            &format!("device {} fetch failed: {}", id, message).into(),
                        );
                    }
                }

                set_panels.set(merged);
                set_devices.set(fetched);
                set_error.set(None);
                set_loading.set(false);
            });
        }
    };

    // Fetch everything on mount
    let fetch_for_effect = fetch_dashboard.clone();
    create_effect(move |_| fetch_for_effect());

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Energy use across your devices, last 24 hours"</p>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(message) = error.get() {
                    let retry = fetch_dashboard.clone();
                    view! {
                        <div class="bg-gray-800 rounded-xl p-12 text-center">
                            <p class="text-red-400 mb-4">{message}</p>
                            <button
                                on:click=move |_| retry()
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            >
                                "Try Again"
                            </button>
                        </div>
                    }.into_view()
                } else if devices.get().is_empty() {
                    view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-2">"No devices to monitor yet."</p>
                            <A href="/devices" class="text-primary-400 hover:text-primary-300">
                                "Add a device"
                            </A>
                        </div>
                    }.into_view()
                } else {
                    let panel_map = panels.get();
                    view! {
                        <div class="grid md:grid-cols-2 gap-6">
                            {devices.get().into_iter().map(|device| {
                                let panel = panel_map.get(&device.id).cloned();
                                view! { <DevicePanelView device=device panel=panel /> }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// One device's chart and stat summary
#[component]
fn DevicePanelView(device: Device, panel: Option<DevicePanel>) -> impl IntoView {
    let Some(panel) = panel else {
        // Panels are keyed from the same device list, so this only shows
        // transiently if a refetch swaps the list first.
        return view! { <CardSkeleton /> }.into_view();
    };

    let chart = match panel.telemetry {
        Ok(points) => view! {
            <TelemetryChart points=Signal::derive(move || points.clone()) />
        }
        .into_view(),
        Err(message) => view! {
            <div class="h-48 flex items-center justify-center text-sm text-red-400">
                "Telemetry unavailable: " {message}
            </div>
        }
        .into_view(),
    };

    let stats = match panel.stats {
        Ok(stats) => view! {
            <div class="mt-4">
                <StatSummary stats=stats />
            </div>
        }
        .into_view(),
        Err(message) => view! {
            <p class="mt-4 text-sm text-red-400">"Stats unavailable: " {message}</p>
        }
        .into_view(),
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-lg font-semibold text-primary-400 mb-4">{device.name}</h2>
            {chart}
            {stats}
        </section>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: i64, name: &str) -> Device {
        Device {
            id,
            name: name.to_string(),
            device_type: "Other".to_string(),
        }
    }

    fn stats(avg: f64) -> DeviceStats {
        DeviceStats {
            avg_energy_watts: avg,
            max_energy_watts: avg * 2.0,
            min_energy_watts: avg / 2.0,
            total_energy_watt_hours: avg * 24.0,
        }
    }

    #[test]
    fn one_failing_device_does_not_blank_the_others() {
        let devices = vec![device(1, "Fridge"), device(2, "Heater"), device(3, "TV")];
        let stats_results = vec![
            Ok(stats(100.0)),
            Err("Failed to fetch stats".to_string()),
            Ok(stats(40.0)),
        ];
        let telemetry_results = vec![Ok(vec![]), Ok(vec![]), Ok(vec![])];

        let panels = merge_panels(&devices, stats_results, telemetry_results);

        assert_eq!(panels.len(), 3);
        assert!(panels[&1].failure().is_none());
        assert_eq!(panels[&2].failure(), Some("Failed to fetch stats"));
        assert!(panels[&3].failure().is_none());
        // Device 2's telemetry still rendered best-effort
        assert!(panels[&2].telemetry.is_ok());
    }

    #[test]
    fn panels_are_keyed_by_device_id() {
        let devices = vec![device(7, "Washer"), device(12, "Dryer")];
        let panels = merge_panels(
            &devices,
            vec![Ok(stats(10.0)), Ok(stats(20.0))],
            vec![Ok(vec![]), Ok(vec![])],
        );

        assert_eq!(
            panels[&12].stats.as_ref().unwrap().avg_energy_watts,
            20.0
        );
    }

    #[test]
    fn telemetry_failure_is_reported() {
        let devices = vec![device(1, "Fridge")];
        let panels = merge_panels(
            &devices,
            vec![Ok(stats(100.0))],
            vec![Err("Network error: timed out".to_string())],
        );

        assert_eq!(panels[&1].failure(), Some("Network error: timed out"));
    }
}
