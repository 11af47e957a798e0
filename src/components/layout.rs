use crate::state::auth::{self, use_auth};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let can_manage_users = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.scope == crate::api::UserScope::Admin)
            .unwrap_or(false)
    };
    let is_authenticated = move || auth.get().is_authenticated;
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">
                            {t!("app.title").to_string()}
                        </h1>
                    </div>
                    <nav class="flex items-center space-x-4">
                        <Show when=can_manage_users>
                            <a href="/users" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                {t!("nav.users").to_string()}
                            </a>
                        </Show>
                        <Show
                            when=is_authenticated
                            fallback=move || view! {
                                <a href="/login" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    {t!("nav.login").to_string()}
                                </a>
                            }
                        >
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                                disabled={move || logout_pending.get()}
                            >
                                {t!("nav.logout").to_string()}
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_users_link_for_admin() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Header /> }
        });
        assert!(html.contains("href=\"/users\""));
        assert!(html.contains("Sign out"));
    }

    #[test]
    fn header_hides_users_link_for_regular_user() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Header /> }
        });
        assert!(!html.contains("href=\"/users\""));
    }

    #[test]
    fn header_offers_login_when_anonymous() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <Header /> }
        });
        assert!(html.contains("href=\"/login\""));
        assert!(!html.contains("Sign out"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
