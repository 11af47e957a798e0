#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{User, UserScope};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> User {
        User {
            id: 1,
            email: "admin@example.com".into(),
            scope: UserScope::Admin,
            active: true,
        }
    }

    pub fn regular_user() -> User {
        User {
            id: 2,
            email: "member@example.com".into(),
            scope: UserScope::User,
            active: true,
        }
    }

    pub fn provide_auth(
        user: Option<User>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
