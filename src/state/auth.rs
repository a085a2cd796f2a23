//! Session Auth Context
//!
//! The sign-in flow outside this app deposits a bearer token in browser
//! local storage; this context reads it at request time, so a token that
//! changes between calls is always picked up.

/// Local storage key the session token is persisted under
const TOKEN_STORAGE_KEY: &str = "wattscope_token";

/// Credential provider handed to each API client constructor.
#[derive(Clone, Copy, Default)]
pub struct AuthContext;

impl AuthContext {
    pub fn new() -> Self {
        Self
    }

    /// Current session bearer token, if a session is active.
    pub fn token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_STORAGE_KEY).ok()?
    }
}
