use crate::pages::users::utils::{DialogState, ExpireUnit};
use leptos::ev::KeyboardEvent;
use leptos::*;
use rust_i18n::t;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

#[component]
pub fn BanUserDialog(
    dialog: RwSignal<DialogState>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || dialog.with(|state| state.is_ban()));
    let subject_line = Signal::derive(move || {
        dialog.with(|state| {
            state
                .subject()
                .map(|subject| t!("users.ban_subject", email = subject.email.clone()).to_string())
                .unwrap_or_default()
        })
    });
    let reason = Signal::derive(move || {
        dialog.with(|state| {
            state
                .ban_form()
                .map(|form| form.reason.clone())
                .unwrap_or_default()
        })
    });
    let amount = Signal::derive(move || {
        dialog.with(|state| {
            state
                .ban_form()
                .map(|form| form.expire_amount.clone())
                .unwrap_or_default()
        })
    });
    let unit_value = Signal::derive(move || {
        dialog.with(|state| {
            state
                .ban_form()
                .and_then(|form| form.expire_unit)
                .map(|unit| unit.as_str().to_string())
                .unwrap_or_default()
        })
    });

    let cancel_on_backdrop = on_cancel;
    let cancel_on_header_button = on_cancel;
    let cancel_on_esc = on_cancel;
    let cancel_on_footer_button = on_cancel;
    let submit_on_footer_button = on_submit;

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label={t!("dialog.close").to_string()}
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| cancel_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel_on_esc.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <div>
                            <h2 class="text-lg font-semibold text-fg">
                                {t!("users.ban_title").to_string()}
                            </h2>
                            <p class="text-sm text-fg-muted">{move || subject_line.get()}</p>
                        </div>
                        <button
                            type="button"
                            aria-label={t!("dialog.close").to_string()}
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| cancel_on_header_button.call(())
                        >
                            {"✕"}
                        </button>
                    </div>

                    <div class="space-y-3">
                        <div>
                            <label for="ban-reason" class="block text-sm font-medium text-fg">
                                {t!("users.ban_reason_label").to_string()}
                            </label>
                            <textarea
                                id="ban-reason"
                                rows="3"
                                class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                                prop:value=reason
                                on:input=move |ev| {
                                    let target = event_target::<HtmlTextAreaElement>(&ev);
                                    dialog.update(|state| state.set_ban_reason(target.value()));
                                }
                            ></textarea>
                        </div>
                        <div class="grid grid-cols-2 gap-3">
                            <div>
                                <label for="ban-amount" class="block text-sm font-medium text-fg">
                                    {t!("users.ban_amount_label").to_string()}
                                </label>
                                <input
                                    id="ban-amount"
                                    type="text"
                                    inputmode="numeric"
                                    class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                                    prop:value=amount
                                    on:input=move |ev| {
                                        let target = event_target::<HtmlInputElement>(&ev);
                                        dialog.update(|state| state.set_ban_amount(target.value()));
                                    }
                                />
                            </div>
                            <div>
                                <label for="ban-unit" class="block text-sm font-medium text-fg">
                                    {t!("users.ban_unit_label").to_string()}
                                </label>
                                <select
                                    id="ban-unit"
                                    class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                                    prop:value=unit_value
                                    on:change=move |ev| {
                                        let target = event_target::<HtmlSelectElement>(&ev);
                                        dialog.update(|state| {
                                            state.set_ban_unit(ExpireUnit::parse(&target.value()))
                                        });
                                    }
                                >
                                    <option value="">{t!("users.ban_unit_none").to_string()}</option>
                                    {ExpireUnit::ALL
                                        .iter()
                                        .map(|unit| {
                                            view! {
                                                <option value={unit.as_str()}>{unit.as_str()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>
                        <p class="text-xs text-fg-muted">{t!("users.ban_hint").to_string()}</p>
                    </div>

                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| cancel_on_footer_button.call(())
                        >
                            {t!("dialog.cancel").to_string()}
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                            on:click=move |_| submit_on_footer_button.call(())
                        >
                            {t!("users.ban_submit").to_string()}
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
            id: 4,
            email: "troll@example.com".into(),
            scope: UserScope::User,
            active: true,
        }
    }

    fn render_dialog(open: bool) -> String {
        render_to_string(move || {
            let dialog = create_rw_signal(DialogState::default());
            if open {
                dialog.update(|state| state.open_ban(subject()));
            }
            view! {
                <BanUserDialog
                    dialog=dialog
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn open_dialog_shows_form_fields_and_units() {
        let html = render_dialog(true);
        assert!(html.contains("Ban user"));
        assert!(html.contains("troll@example.com"));
        assert!(html.contains("Reason"));
        assert!(html.contains("no expiry"));
        for unit in ExpireUnit::ALL {
            assert!(html.contains(unit.as_str()));
        }
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_dialog(false);
        assert!(!html.contains("Ban user"));
    }
}
