use leptos::*;
use rust_i18n::t;

#[component]
pub fn UnauthorizedUsersMessage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <p class="text-sm text-fg">{t!("users.unauthorized").to_string()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn UsersFrame(children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">{t!("users.title").to_string()}</h1>
                <p class="mt-1 text-sm text-fg-muted">{t!("users.subtitle").to_string()}</p>
            </div>
            {children()}
        </div>
    }
}
