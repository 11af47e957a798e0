use crate::{
    api::{ApiError, User, UserScope},
    components::layout::{ErrorMessage, LoadingSpinner},
};
use leptos::*;
use rust_i18n::t;
use web_sys::{HtmlInputElement, HtmlSelectElement};

#[component]
pub fn UserTable(
    users: Signal<Vec<User>>,
    fetch_error: Signal<Option<ApiError>>,
    loading: Signal<bool>,
    on_show_detail: Callback<User>,
    on_ban: Callback<User>,
    on_delete: Callback<User>,
    on_scope_change: Callback<(User, UserScope)>,
    on_toggle_active: Callback<User>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">{t!("users.list_title").to_string()}</h3>

            <Show when=move || fetch_error.get().is_some()>
                <ErrorMessage message={fetch_error.get().map(|error| error.error).unwrap_or_default()} />
            </Show>
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && users.get().is_empty() && fetch_error.get().is_none()>
                <p class="text-sm text-fg-muted">{t!("users.empty").to_string()}</p>
            </Show>
            <Show when=move || !users.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {t!("users.header_email").to_string()}
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {t!("users.header_scope").to_string()}
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {t!("users.header_active").to_string()}
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {t!("users.header_actions").to_string()}
                                </th>
                            </tr>
                        </thead>
                        <tbody class="bg-surface-elevated divide-y divide-border">
                            <For
                                each=move || users.get()
                                // Key covers the mutable columns so refreshed rows re-render.
                                key=|user| (user.id, user.scope, user.active)
                                children=move |user: User| {
                                    let on_show_detail = on_show_detail.clone();
                                    let on_ban = on_ban.clone();
                                    let on_delete = on_delete.clone();
                                    let on_scope_change = on_scope_change.clone();
                                    let on_toggle_active = on_toggle_active.clone();
                                    let row_user = user.clone();

                                    let detail_handler = {
                                        let subject = row_user.clone();
                                        move |_| on_show_detail.call(subject.clone())
                                    };
                                    let ban_handler = {
                                        let subject = row_user.clone();
                                        move |_| on_ban.call(subject.clone())
                                    };
                                    let delete_handler = {
                                        let subject = row_user.clone();
                                        move |_| on_delete.call(subject.clone())
                                    };
                                    let scope_handler = {
                                        let subject = row_user.clone();
                                        move |ev: leptos::ev::Event| {
                                            let select = event_target::<HtmlSelectElement>(&ev);
                                            let picked = select.value();
                                            // The select never writes through; it snaps back
                                            // and the confirm dialog decides.
                                            select.set_value(subject.scope.as_str());
                                            if let Some(scope) = UserScope::parse(&picked) {
                                                if scope != subject.scope {
                                                    on_scope_change.call((subject.clone(), scope));
                                                }
                                            }
                                        }
                                    };
                                    let toggle_handler = {
                                        let subject = row_user.clone();
                                        move |ev: leptos::ev::Event| {
                                            let checkbox = event_target::<HtmlInputElement>(&ev);
                                            // Same snap-back: the checkbox reflects the list
                                            // value until the refresh confirms the change.
                                            checkbox.set_checked(subject.active);
                                            on_toggle_active.call(subject.clone());
                                        }
                                    };

                                    view! {
                                        <tr>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-fg">
                                                {row_user.email.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <select
                                                    class="rounded-md border border-border bg-surface px-2 py-1 text-sm text-fg"
                                                    on:change=scope_handler
                                                >
                                                    <option value="admin" selected={row_user.scope == UserScope::Admin}>
                                                        {t!("users.scope_admin").to_string()}
                                                    </option>
                                                    <option value="user" selected={row_user.scope == UserScope::User}>
                                                        {t!("users.scope_user").to_string()}
                                                    </option>
                                                </select>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <input
                                                    type="checkbox"
                                                    class="h-4 w-4 rounded border-border"
                                                    aria-label={t!("users.active_label").to_string()}
                                                    checked={row_user.active}
                                                    prop:checked={row_user.active}
                                                    on:change=toggle_handler
                                                />
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm space-x-2">
                                                <button
                                                    type="button"
                                                    class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                                                    on:click=detail_handler
                                                >
                                                    {t!("users.action_details").to_string()}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                                                    on:click=ban_handler
                                                >
                                                    {t!("users.action_ban").to_string()}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                                                    on:click=delete_handler
                                                >
                                                    {t!("users.action_delete").to_string()}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
