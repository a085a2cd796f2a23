//! HTTP API Clients
//!
//! Typed clients for the telemetry and chat REST services. Every request
//! carries the current session bearer token, read from the credential
//! provider at send time so a token change between calls is picked up.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::api::types::{ChatResponse, Device, DeviceStats, ErrorBody, TelemetryPoint};
use crate::state::auth::AuthContext;

/// Default telemetry service base URL
pub const DEFAULT_TELEMETRY_BASE: &str = "http://localhost:8001";

/// Default chat service base URL
pub const DEFAULT_CHAT_BASE: &str = "http://localhost:8002";

/// Aggregation window requested for dashboard stat summaries
pub const STATS_PERIOD: &str = "24h";

/// Resolve the telemetry service base URL: local storage override, then
/// compile-time env, then default.
pub fn telemetry_api_base() -> String {
    resolve_base(
        "wattscope_telemetry_url",
        option_env!("TELEMETRY_API_URL"),
        DEFAULT_TELEMETRY_BASE,
    )
}

/// Resolve the chat service base URL.
pub fn chat_api_base() -> String {
    resolve_base("wattscope_chat_url", option_env!("CHAT_API_URL"), DEFAULT_CHAT_BASE)
}

fn resolve_base(storage_key: &str, build_env: Option<&str>, default: &str) -> String {
    storage_override(storage_key)
        .or_else(|| build_env.map(str::to_string))
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

fn storage_override(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Attach the bearer header when a session token is present.
fn authorized(request: RequestBuilder, auth: &AuthContext) -> RequestBuilder {
    match auth.token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Extract the service's `detail` message, falling back to a per-action one.
async fn error_detail(response: &Response, fallback: &str) -> String {
    match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => fallback.to_string(),
    }
}

/// Client for the telemetry service (devices, series, stats).
#[derive(Clone)]
pub struct TelemetryApi {
    base: String,
    auth: AuthContext,
}

impl TelemetryApi {
    pub fn new(base: String, auth: AuthContext) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            auth,
        }
    }

    /// Fetch the authenticated user's device collection.
    pub async fn fetch_devices(&self) -> Result<Vec<Device>, String> {
        let response = authorized(Request::get(&format!("{}/api/devices", self.base)), &self.auth)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_detail(&response, "Failed to fetch devices").await);
        }

        response.json().await.map_err(|e| format!("Parse error: {}", e))
    }

    /// Register a new device. The created device is returned but callers
    /// refetch the full list rather than patching it in.
    pub async fn create_device(&self, name: &str, device_type: &str) -> Result<Device, String> {
        #[derive(serde::Serialize)]
        struct CreateDeviceRequest {
            name: String,
            device_type: String,
        }

        let response = authorized(Request::post(&format!("{}/api/devices", self.base)), &self.auth)
            .json(&CreateDeviceRequest {
                name: name.to_string(),
                device_type: device_type.to_string(),
            })
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_detail(&response, "Failed to add device").await);
        }

        response.json().await.map_err(|e| format!("Parse error: {}", e))
    }

    /// Fetch a device's aggregate stats over the trailing 24h window.
    pub async fn fetch_stats(&self, device_id: i64) -> Result<DeviceStats, String> {
        let url = format!(
            "{}/api/telemetry/{}/stats?period={}",
            self.base, device_id, STATS_PERIOD
        );
        let response = authorized(Request::get(&url), &self.auth)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_detail(&response, "Failed to fetch stats").await);
        }

        response.json().await.map_err(|e| format!("Parse error: {}", e))
    }

    /// Fetch a device's full telemetry series, in server order.
    pub async fn fetch_telemetry(&self, device_id: i64) -> Result<Vec<TelemetryPoint>, String> {
        let url = format!("{}/api/telemetry/{}", self.base, device_id);
        let response = authorized(Request::get(&url), &self.auth)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_detail(&response, "Failed to fetch telemetry").await);
        }

        response.json().await.map_err(|e| format!("Parse error: {}", e))
    }
}

/// Client for the chat service (natural-language queries).
#[derive(Clone)]
pub struct ChatApi {
    base: String,
    auth: AuthContext,
}

impl ChatApi {
    pub fn new(base: String, auth: AuthContext) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            auth,
        }
    }

    /// Submit a free-text query. The session token rides both in the bearer
    /// header and in the body; the chat service forwards the latter to the
    /// telemetry service on the caller's behalf.
    pub async fn query(&self, text: &str) -> Result<ChatResponse, String> {
        #[derive(serde::Serialize)]
        struct ChatQueryRequest {
            text: String,
            auth_token: String,
        }

        let auth_token = self.auth.token().unwrap_or_default();

        let response = authorized(
            Request::post(&format!("{}/api/chat/query", self.base)),
            &self.auth,
        )
        .json(&ChatQueryRequest {
            text: text.to_string(),
            auth_token,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_detail(&response, "Failed to get response").await);
        }

        response.json().await.map_err(|e| format!("Parse error: {}", e))
    }
}
