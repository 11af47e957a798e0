//! Browser storage helpers.
//!
//! The session token lives in `localStorage`. Server-side builds (used by the
//! host test suite) have no window, so every accessor degrades to a no-op
//! there and `access_token` reports no session.

pub(crate) const ACCESS_TOKEN_KEY: &str = "gatekeeper_access_token";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or_else(|| "Window object not available".to_string())?;
    window
        .local_storage()
        .map_err(|_| "Failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage not available".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn access_token() -> Option<String> {
    local_storage().ok()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
pub fn access_token() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn store_access_token(token: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_access_token(_token: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn clear_session() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_session() {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_build_has_no_session() {
        assert_eq!(access_token(), None);
        store_access_token("ignored");
        assert_eq!(access_token(), None);
        clear_session();
        assert_eq!(access_token(), None);
    }
}
