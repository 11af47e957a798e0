use crate::{
    api::{User, UserScope},
    components::layout::LoadingSpinner,
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if !state.is_authenticated {
            "/login"
        } else if !is_admin_user(state.user.as_ref()) {
            "/"
        } else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn is_admin_user(user: Option<&User>) -> bool {
    user.map(|user| user.scope == UserScope::Admin).unwrap_or(false)
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireAuth};
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_admin_renders_children_for_admin_user() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-content"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-content"));
    }

    #[test]
    fn require_admin_hides_children_for_regular_user() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-content"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-content"));
    }
}
