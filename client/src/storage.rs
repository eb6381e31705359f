use gloo_storage::{LocalStorage, Storage};

use instancer_shared::{AUTH_TOKEN_KEY, ClientSettings, SETTINGS_KEY};

/// The bearer token is written by the login page as a raw string, not JSON,
/// so it is read through the raw storage handle.
pub fn auth_token() -> Option<String> {
    LocalStorage::raw().get_item(AUTH_TOKEN_KEY).ok().flatten()
}

pub fn clear_auth_token() {
    LocalStorage::delete(AUTH_TOKEN_KEY);
}

pub fn load_settings() -> ClientSettings {
    let saved: ClientSettings = LocalStorage::get(SETTINGS_KEY).unwrap_or_default();
    saved.sanitized()
}
