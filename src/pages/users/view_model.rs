use super::{
    repository::UsersRepository,
    utils::{DialogState, ExpireUnit, MessageState},
};
use crate::{
    api::{ApiClient, ApiError, BanUserRequest, User, UserDetail, UserPatch, UserScope},
    state::auth::use_auth,
};
use leptos::*;
use rust_i18n::t;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub is_admin: Memo<bool>,
    pub dialog: RwSignal<DialogState>,
    pub messages: RwSignal<MessageState>,
    pub users_reload: RwSignal<u32>,
    pub users_resource: Resource<(bool, u32), Result<Vec<User>, ApiError>>,
    pub detail_resource: Resource<Option<i64>, Result<Option<UserDetail>, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    pub ban_action: Action<(i64, BanUserRequest), Result<(), ApiError>>,
    pub patch_action: Action<(i64, UserPatch), Result<(), ApiError>>,
}

impl UsersViewModel {
    pub fn open_detail(&self, subject: User) {
        self.dialog.update(|state| state.open_detail(subject));
    }

    pub fn open_delete(&self, subject: User) {
        self.dialog.update(|state| state.open_delete(subject));
    }

    pub fn open_ban(&self, subject: User) {
        self.dialog.update(|state| state.open_ban(subject));
    }

    pub fn open_scope_change(&self, subject: User, scope: UserScope) {
        self.dialog.update(|state| state.open_scope_change(subject, scope));
    }

    pub fn close_dialog(&self) {
        self.dialog.update(|state| state.close());
    }

    pub fn set_ban_reason(&self, reason: String) {
        self.dialog.update(|state| state.set_ban_reason(reason));
    }

    pub fn set_ban_amount(&self, amount: String) {
        self.dialog.update(|state| state.set_ban_amount(amount));
    }

    pub fn set_ban_unit(&self, unit: Option<ExpireUnit>) {
        self.dialog.update(|state| state.set_ban_unit(unit));
    }

    /// Fires the remote call for the open dialog and closes it right away.
    /// The outcome lands in the page banner once the action settles.
    pub fn submit_dialog(&self) {
        let snapshot = self.dialog.get_untracked();
        match &snapshot {
            DialogState::ConfirmDelete { subject } => {
                self.delete_action.dispatch(subject.id);
            }
            DialogState::Ban { subject, form } => {
                self.ban_action.dispatch((subject.id, form.to_request()));
            }
            DialogState::ChangeScope { subject, scope } => {
                self.patch_action
                    .dispatch((subject.id, UserPatch::scope(*scope)));
            }
            DialogState::Detail { .. } | DialogState::Closed => {}
        }
        self.dialog.update(|state| state.close());
    }

    /// Row-level toggle; goes straight to the patch action, no dialog.
    pub fn toggle_active(&self, user: &User) {
        self.patch_action
            .dispatch((user.id, UserPatch::active(!user.active)));
    }
}

/// Applies a settled mutation to the page: success puts up the banner and
/// triggers one list refresh, failure only reports.
pub(crate) fn handle_mutation_result(
    result: Result<(), ApiError>,
    success_message: String,
    messages: RwSignal<MessageState>,
    users_reload: RwSignal<u32>,
) {
    match result {
        Ok(()) => {
            messages.update(|state| state.set_success(success_message));
            users_reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(error) => {
            messages.update(|state| state.set_error(error.error));
        }
    }
}

pub fn use_users_view_model() -> UsersViewModel {
    let (auth, _set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = UsersRepository::new_with_client(Rc::new(api));

    let is_admin = create_memo(move |_| {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.scope == UserScope::Admin)
            .unwrap_or(false)
    });

    let dialog = create_rw_signal(DialogState::default());
    let messages = create_rw_signal(MessageState::default());
    let users_reload = create_rw_signal(0u32);

    let repo_for_list = repository.clone();
    let users_resource = create_resource(
        move || (is_admin.get(), users_reload.get()),
        move |(allowed, _reload)| {
            let repo = repo_for_list.clone();
            async move {
                if !allowed {
                    Err(ApiError::unknown(t!("users.unauthorized")))
                } else {
                    repo.fetch_users().await
                }
            }
        },
    );

    // Keyed on the detail dialog's subject so every open fetches fresh data.
    let repo_for_detail = repository.clone();
    let detail_resource = create_resource(
        move || dialog.with(|state| state.detail_subject_id()),
        move |subject_id| {
            let repo = repo_for_detail.clone();
            async move {
                match subject_id {
                    Some(id) => repo.fetch_user_detail(id).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |user_id: &i64| {
        let repo = repo_for_delete.clone();
        let user_id = *user_id;
        async move { repo.delete_user(user_id).await }
    });

    let repo_for_ban = repository.clone();
    let ban_action = create_action(move |(user_id, request): &(i64, BanUserRequest)| {
        let repo = repo_for_ban.clone();
        let user_id = *user_id;
        let request = request.clone();
        async move { repo.ban_user(user_id, request).await }
    });

    let repo_for_patch = repository.clone();
    let patch_action = create_action(move |(user_id, patch): &(i64, UserPatch)| {
        let repo = repo_for_patch.clone();
        let user_id = *user_id;
        let patch = patch.clone();
        async move { repo.update_user(user_id, patch).await.map(|_| ()) }
    });

    // Effects
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            handle_mutation_result(
                result,
                t!("users.deleted").to_string(),
                messages,
                users_reload,
            );
        }
    });

    create_effect(move |_| {
        if let Some(result) = ban_action.value().get() {
            handle_mutation_result(
                result,
                t!("users.banned").to_string(),
                messages,
                users_reload,
            );
        }
    });

    create_effect(move |_| {
        if let Some(result) = patch_action.value().get() {
            handle_mutation_result(
                result,
                t!("users.updated").to_string(),
                messages,
                users_reload,
            );
        }
    });

    UsersViewModel {
        is_admin,
        dialog,
        messages,
        users_reload,
        users_resource,
        detail_resource,
        delete_action,
        ban_action,
        patch_action,
    }
}
