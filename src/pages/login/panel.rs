use crate::{
    api::LoginRequest,
    components::layout::ErrorMessage,
    pages::login::utils,
    state::auth,
};
use leptos::ev::SubmitEvent;
use leptos::*;
use rust_i18n::t;
use web_sys::HtmlInputElement;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = login_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/users");
                        }
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            }
        });
    }

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        if let Err(message) = utils::validate_credentials(&email_value, &password_value) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {t!("login.title").to_string()}
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {t!("login.subtitle").to_string()}
                    </p>
                </div>

                <Show when=move || error.get().is_some()>
                    <ErrorMessage message={error.get().unwrap_or_default()} />
                </Show>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">
                                {t!("login.email_label").to_string()}
                            </label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border bg-surface-elevated text-fg rounded-t-md focus:outline-none focus:ring-action-primary-bg focus:border-action-primary-bg focus:z-10 sm:text-sm"
                                placeholder={t!("login.email_label").to_string()}
                                prop:value=email
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    set_email.set(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">
                                {t!("login.password_label").to_string()}
                            </label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border bg-surface-elevated text-fg rounded-b-md focus:outline-none focus:ring-action-primary-bg focus:border-action-primary-bg focus:z-10 sm:text-sm"
                                placeholder={t!("login.password_label").to_string()}
                                prop:value=password
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    set_password.set(target.value());
                                }
                            />
                        </div>
                    </div>

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="group relative w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none disabled:opacity-50"
                    >
                        {move || {
                            if pending.get() {
                                t!("login.submitting").to_string()
                            } else {
                                t!("login.submit").to_string()
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
