use crate::{
    api::{User, UserScope},
    components::{
        confirm_dialog::ConfirmDialog,
        layout::{ErrorMessage, Layout, SuccessMessage},
    },
};
use leptos::*;
use rust_i18n::t;

use super::{
    components::{ban_dialog::BanUserDialog, detail::UserDetailDialog, table::UserTable},
    layout::{UnauthorizedUsersMessage, UsersFrame},
    utils::DialogState,
    view_model::use_users_view_model,
};

#[component]
pub fn UsersPage() -> impl IntoView {
    let vm = use_users_view_model();

    let users = Signal::derive(move || {
        vm.users_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error =
        Signal::derive(move || vm.users_resource.get().and_then(|result| result.err()));
    let loading = vm.users_resource.loading();

    let on_show_detail = Callback::new(move |user: User| vm.open_detail(user));
    let on_ban = Callback::new(move |user: User| vm.open_ban(user));
    let on_delete = Callback::new(move |user: User| vm.open_delete(user));
    let on_scope_change =
        Callback::new(move |(user, scope): (User, UserScope)| vm.open_scope_change(user, scope));
    let on_toggle_active = Callback::new(move |user: User| vm.toggle_active(&user));
    let on_dialog_submit = Callback::new(move |_| vm.submit_dialog());
    let on_dialog_cancel = Callback::new(move |_| vm.close_dialog());
    let on_detail_close = Callback::new(move |_| vm.close_dialog());

    let delete_open = Signal::derive(move || vm.dialog.with(|state| state.is_confirm_delete()));
    let delete_message = Signal::derive(move || {
        vm.dialog.with(|state| match state {
            DialogState::ConfirmDelete { subject } => {
                t!("users.delete_message", email = subject.email.clone()).to_string()
            }
            _ => String::new(),
        })
    });
    let scope_open = Signal::derive(move || vm.dialog.with(|state| state.is_change_scope()));
    let scope_message = Signal::derive(move || {
        vm.dialog.with(|state| match state {
            DialogState::ChangeScope { subject, scope } => t!(
                "users.scope_message",
                email = subject.email.clone(),
                scope = scope.as_str()
            )
            .to_string(),
            _ => String::new(),
        })
    });

    view! {
        <Layout>
            <Show
                when=move || vm.is_admin.get()
                fallback=move || view! { <UnauthorizedUsersMessage /> }.into_view()
            >
                <UsersFrame>
                    <Show when=move || vm.messages.get().error.is_some()>
                        <ErrorMessage message={vm.messages.get().error.unwrap_or_default()} />
                    </Show>
                    <Show when=move || vm.messages.get().success.is_some()>
                        <SuccessMessage message={vm.messages.get().success.unwrap_or_default()} />
                    </Show>

                    <UserTable
                        users=users
                        fetch_error=fetch_error
                        loading=loading
                        on_show_detail=on_show_detail
                        on_ban=on_ban
                        on_delete=on_delete
                        on_scope_change=on_scope_change
                        on_toggle_active=on_toggle_active
                    />
                </UsersFrame>

                <UserDetailDialog
                    dialog=vm.dialog
                    detail_resource=vm.detail_resource
                    on_close=on_detail_close
                />
                <BanUserDialog
                    dialog=vm.dialog
                    on_submit=on_dialog_submit
                    on_cancel=on_dialog_cancel
                />
                <ConfirmDialog
                    is_open=delete_open
                    title={t!("users.delete_title").to_string()}
                    message=delete_message
                    confirm_label={t!("users.delete_confirm").to_string()}
                    destructive=true
                    on_confirm=on_dialog_submit
                    on_cancel=on_dialog_cancel
                />
                <ConfirmDialog
                    is_open=scope_open
                    title={t!("users.scope_title").to_string()}
                    message=scope_message
                    confirm_label={t!("users.scope_confirm").to_string()}
                    destructive=false
                    on_confirm=on_dialog_submit
                    on_cancel=on_dialog_cancel
                />
            </Show>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_sees_the_management_frame() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <UsersPage /> }
        });
        assert!(html.contains("User management"));
        assert!(!html.contains("only available to administrators"));
    }

    #[test]
    fn regular_user_sees_the_unauthorized_message() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <UsersPage /> }
        });
        assert!(html.contains("only available to administrators"));
        assert!(!html.contains("Registered users"));
    }
}
