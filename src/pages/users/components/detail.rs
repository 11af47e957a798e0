use crate::{
    api::{ApiError, UserDetail},
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::users::utils::DialogState,
};
use leptos::ev::KeyboardEvent;
use leptos::*;
use rust_i18n::t;

#[component]
pub fn UserDetailDialog(
    dialog: RwSignal<DialogState>,
    detail_resource: Resource<Option<i64>, Result<Option<UserDetail>, ApiError>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || dialog.with(|state| state.is_detail()));
    let subject_email = Signal::derive(move || {
        dialog.with(|state| {
            state
                .subject()
                .map(|subject| subject.email.clone())
                .unwrap_or_default()
        })
    });
    let detail_loading = detail_resource.loading();

    let close_on_backdrop = on_close;
    let close_on_header_button = on_close;
    let close_on_esc = on_close;
    let close_on_footer_button = on_close;

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label={t!("dialog.close").to_string()}
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| close_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close_on_esc.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <div>
                            <h2 class="text-lg font-semibold text-fg">
                                {t!("users.detail_title").to_string()}
                            </h2>
                            <p class="text-sm text-fg-muted">{move || subject_email.get()}</p>
                        </div>
                        <button
                            type="button"
                            aria-label={t!("dialog.close").to_string()}
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| close_on_header_button.call(())
                        >
                            {"✕"}
                        </button>
                    </div>

                    {move || {
                        if detail_loading.get() {
                            return view! { <LoadingSpinner /> }.into_view();
                        }
                        match detail_resource.get() {
                            Some(Ok(Some(detail))) => {
                                let status = if detail.active {
                                    t!("users.detail_status_active").to_string()
                                } else {
                                    t!("users.detail_status_suspended").to_string()
                                };
                                view! {
                                    <div class="space-y-4">
                                        <div class="grid grid-cols-2 gap-3 text-sm">
                                            <div>
                                                <p class="text-fg-muted">{t!("users.detail_scope").to_string()}</p>
                                                <p class="text-fg font-medium">{detail.scope.as_str()}</p>
                                            </div>
                                            <div>
                                                <p class="text-fg-muted">{t!("users.detail_status").to_string()}</p>
                                                <p class="text-fg font-medium">{status}</p>
                                            </div>
                                            <div>
                                                <p class="text-fg-muted">{t!("users.detail_created_at").to_string()}</p>
                                                <p class="text-fg">
                                                    {detail.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                                </p>
                                            </div>
                                            {detail.banned_until.map(|banned_until| view! {
                                                <div>
                                                    <p class="text-fg-muted">{t!("users.detail_banned_until").to_string()}</p>
                                                    <p class="text-fg">
                                                        {banned_until.format("%Y-%m-%d %H:%M").to_string()}
                                                    </p>
                                                </div>
                                            })}
                                        </div>
                                        <div class="text-sm">
                                            <p class="text-fg-muted">{t!("users.detail_description").to_string()}</p>
                                            <p class="text-fg">
                                                {detail.description.clone().unwrap_or_else(|| {
                                                    t!("users.detail_description_empty").to_string()
                                                })}
                                            </p>
                                        </div>
                                    </div>
                                }
                                .into_view()
                            }
                            Some(Err(error)) => {
                                view! { <ErrorMessage message={error.error} /> }.into_view()
                            }
                            _ => view! { <LoadingSpinner /> }.into_view(),
                        }
                    }}

                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| close_on_footer_button.call(())
                        >
                            {t!("dialog.close").to_string()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{User, UserScope};
    use crate::test_support::ssr::render_to_string;

    fn subject() -> User {
        User {
            id: 5,
            email: "inspected@example.com".into(),
            scope: UserScope::User,
            active: true,
        }
    }

    fn render_dialog(open: bool) -> String {
        render_to_string(move || {
            let dialog = create_rw_signal(DialogState::default());
            if open {
                dialog.update(|state| state.open_detail(subject()));
            }
            let detail_resource = create_resource(
                move || dialog.with(|state| state.detail_subject_id()),
                |_| async move { Ok::<Option<UserDetail>, ApiError>(None) },
            );
            view! {
                <UserDetailDialog
                    dialog=dialog
                    detail_resource=detail_resource
                    on_close=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn open_dialog_shows_subject_and_loads() {
        let html = render_dialog(true);
        assert!(html.contains("User details"));
        assert!(html.contains("inspected@example.com"));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_dialog(false);
        assert!(!html.contains("User details"));
        assert!(!html.contains("inspected@example.com"));
    }
}
