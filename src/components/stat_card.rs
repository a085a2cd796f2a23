//! Stat Summary Component
//!
//! Aggregate power and energy figures for one device or one chat answer.

use leptos::*;

use crate::api::types::DeviceStats;

/// Power in watts, one decimal.
pub fn format_watts(watts: f64) -> String {
    format!("{:.1} W", watts)
}

/// Energy in kilowatt-hours, two decimals, converted from watt-hours.
pub fn format_kilowatt_hours(watt_hours: f64) -> String {
    format!("{:.2} kWh", watt_hours / 1000.0)
}

/// Stat summary row: average power, maximum power, total energy.
#[component]
pub fn StatSummary(stats: DeviceStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-4">
            <StatBlock label="Average Power" value=format_watts(stats.avg_energy_watts) />
            <StatBlock label="Maximum Power" value=format_watts(stats.max_energy_watts) />
            <StatBlock label="Total Energy" value=format_kilowatt_hours(stats.total_energy_watt_hours) />
        </div>
    }
}

/// Single labeled figure
#[component]
fn StatBlock(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <span class="block text-sm text-gray-400">{label}</span>
            <span class="text-xl font-semibold">{value}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watts_render_to_one_decimal() {
        assert_eq!(format_watts(123.456), "123.5 W");
        assert_eq!(format_watts(0.0), "0.0 W");
        assert_eq!(format_watts(1500.0), "1500.0 W");
    }

    #[test]
    fn watt_hours_convert_to_kilowatt_hours() {
        assert_eq!(format_kilowatt_hours(2450.0), "2.45 kWh");
        assert_eq!(format_kilowatt_hours(500.0), "0.50 kWh");
        assert_eq!(format_kilowatt_hours(0.0), "0.00 kWh");
    }
}
