//! Devices Page
//!
//! The authenticated user's device collection, with an add-device dialog.
//! The list is refetched wholesale after every successful add.

use leptos::*;

use crate::api::client::TelemetryApi;
use crate::api::types::Device;
use crate::components::{AddDeviceDialog, Loading};
use crate::state::requests::Generation;

/// Device list page component
#[component]
pub fn Devices() -> impl IntoView {
    let api = use_context::<TelemetryApi>().expect("TelemetryApi not found");

    let (devices, set_devices) = create_signal(Vec::<Device>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (show_dialog, set_show_dialog) = create_signal(false);
    let generation = Generation::new();

    let fetch_devices = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let tag = generation.begin();
            set_loading.set(true);

            spawn_local(async move {
                let result = api.fetch_devices().await;
                if !generation.is_current(tag) {
                    return;
                }
                match result {
                    Ok(fetched) => {
                        set_devices.set(fetched);
                        set_error.set(None);
                    }
                    // A failed fetch blocks the view; no partial list is shown
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
            });
        }
    };

    // Initial fetch on mount
    let fetch_for_effect = fetch_devices.clone();
    create_effect(move |_| fetch_for_effect());

    let fetch_for_dialog = fetch_devices.clone();

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Your Devices"</h1>
                    <p class="text-gray-400 mt-1">"Appliances reporting to the telemetry service"</p>
                </div>

                <button
                    on:click=move |_| set_show_dialog.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Add Device"
                </button>
            </div>

            // Add device dialog
            {move || {
                if show_dialog.get() {
                    let refetch = fetch_for_dialog.clone();
                    view! {
                        <AddDeviceDialog
                            on_close=move || set_show_dialog.set(false)
                            on_created=move || refetch()
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Device grid, or the blocking error state
            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(message) = error.get() {
                    let retry = fetch_devices.clone();
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
                } else {
                    let list = devices.get();
                    if list.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-gray-400">"No devices yet. Add your first one!"</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {list.into_iter().map(|device| {
                                    view! { <DeviceCard device=device /> }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Single device card
#[component]
fn DeviceCard(device: Device) -> impl IntoView {
    let Device {
        id,
        name,
        device_type,
    } = device;

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <h3 class="font-semibold text-lg">{name}</h3>
            <p class="text-gray-400 mt-1">"Type: " {device_type}</p>
            <p class="text-gray-500 text-sm mt-2">"Device ID: " {id}</p>
        </div>
    }
}
