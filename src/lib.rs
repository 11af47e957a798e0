use leptos::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use pages::{home::HomePage, login::LoginPage, users::UsersPage};

rust_i18n::i18n!("locales", fallback = "en");

#[component]
pub fn App() -> impl IntoView {
    view! {
        <crate::state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/users" view=ProtectedUsers/>
                </Routes>
            </Router>
        </crate::state::auth::AuthProvider>
    }
}

// Admin gating happens inside the page so signed-in non-admins get the
// unauthorized notice instead of a redirect loop.
#[component]
fn ProtectedUsers() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><UsersPage/></crate::components::guard::RequireAuth> }
}

#[cfg(target_arch = "wasm32")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting Gatekeeper frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__GATEKEEPER_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    mount_to_body(App);
}
