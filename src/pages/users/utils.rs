//! Dialog state for the user management screen.

use crate::api::{BanUserRequest, User, UserScope};

/// Time unit accepted by the ban endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpireUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl ExpireUnit {
    pub const ALL: [ExpireUnit; 6] = [
        ExpireUnit::Minutes,
        ExpireUnit::Hours,
        ExpireUnit::Days,
        ExpireUnit::Weeks,
        ExpireUnit::Months,
        ExpireUnit::Years,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpireUnit::Minutes => "minutes",
            ExpireUnit::Hours => "hours",
            ExpireUnit::Days => "days",
            ExpireUnit::Weeks => "weeks",
            ExpireUnit::Months => "months",
            ExpireUnit::Years => "years",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "minutes" => Some(ExpireUnit::Minutes),
            "hours" => Some(ExpireUnit::Hours),
            "days" => Some(ExpireUnit::Days),
            "weeks" => Some(ExpireUnit::Weeks),
            "months" => Some(ExpireUnit::Months),
            "years" => Some(ExpireUnit::Years),
            _ => None,
        }
    }
}

/// Composes the wire token for a ban expiry. `"x"` stands for "never".
/// The amount goes through untrimmed; the server validates it.
pub fn expire_token(amount: &str, unit: Option<ExpireUnit>) -> String {
    match unit {
        Some(unit) if !amount.is_empty() => format!("{}:{}", amount, unit.as_str()),
        _ => "x".to_string(),
    }
}

/// Transient inputs of the ban dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BanForm {
    pub reason: String,
    pub expire_amount: String,
    pub expire_unit: Option<ExpireUnit>,
}

impl BanForm {
    pub fn to_request(&self) -> BanUserRequest {
        BanUserRequest {
            reason: self.reason.clone(),
            expire: expire_token(&self.expire_amount, self.expire_unit),
        }
    }
}

/// Which dialog is on screen. At most one can be open; opening another
/// replaces the state wholesale, ban form edits included.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    Detail {
        subject: User,
    },
    ConfirmDelete {
        subject: User,
    },
    Ban {
        subject: User,
        form: BanForm,
    },
    ChangeScope {
        subject: User,
        scope: UserScope,
    },
}

impl DialogState {
    pub fn open_detail(&mut self, subject: User) {
        *self = DialogState::Detail { subject };
    }

    pub fn open_delete(&mut self, subject: User) {
        *self = DialogState::ConfirmDelete { subject };
    }

    pub fn open_ban(&mut self, subject: User) {
        *self = DialogState::Ban {
            subject,
            form: BanForm::default(),
        };
    }

    pub fn open_scope_change(&mut self, subject: User, scope: UserScope) {
        *self = DialogState::ChangeScope { subject, scope };
    }

    pub fn close(&mut self) {
        *self = DialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn subject(&self) -> Option<&User> {
        match self {
            DialogState::Closed => None,
            DialogState::Detail { subject }
            | DialogState::ConfirmDelete { subject }
            | DialogState::Ban { subject, .. }
            | DialogState::ChangeScope { subject, .. } => Some(subject),
        }
    }

    /// Subject id while the detail dialog is up, used as the fetch key.
    pub fn detail_subject_id(&self) -> Option<i64> {
        match self {
            DialogState::Detail { subject } => Some(subject.id),
            _ => None,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, DialogState::Detail { .. })
    }

    pub fn is_confirm_delete(&self) -> bool {
        matches!(self, DialogState::ConfirmDelete { .. })
    }

    pub fn is_ban(&self) -> bool {
        matches!(self, DialogState::Ban { .. })
    }

    pub fn is_change_scope(&self) -> bool {
        matches!(self, DialogState::ChangeScope { .. })
    }

    pub fn ban_form(&self) -> Option<&BanForm> {
        match self {
            DialogState::Ban { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn pending_scope(&self) -> Option<UserScope> {
        match self {
            DialogState::ChangeScope { scope, .. } => Some(*scope),
            _ => None,
        }
    }

    /// Ban form edits apply only while the ban dialog is open; anywhere
    /// else they are ignored.
    pub fn set_ban_reason(&mut self, reason: String) {
        if let DialogState::Ban { form, .. } = self {
            form.reason = reason;
        }
    }

    pub fn set_ban_amount(&mut self, amount: String) {
        if let DialogState::Ban { form, .. } = self {
            form.expire_amount = amount;
        }
    }

    pub fn set_ban_unit(&mut self, unit: Option<ExpireUnit>) {
        if let DialogState::Ban { form, .. } = self {
            form.expire_unit = unit;
        }
    }
}

/// Success and error banners for the page. Setting one clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn ban_dialog_edits_compose_the_wire_request() {
        let mut state = DialogState::default();
        state.open_ban(User {
            id: 1,
            email: "banned@example.com".into(),
            scope: UserScope::User,
            active: true,
        });
        state.set_ban_reason("spam".into());
        state.set_ban_amount("5".into());
        state.set_ban_unit(Some(ExpireUnit::Days));

        let request = state.ban_form().map(|form| form.to_request());
        assert_eq!(
            request,
            Some(BanUserRequest {
                reason: "spam".into(),
                expire: "5:days".into(),
            })
        );
    }

    #[wasm_bindgen_test]
    fn message_state_resets_flags() {
        let mut state = MessageState::default();
        state.set_error("NG");
        assert!(state.error.is_some());
        assert!(state.success.is_none());

        state.set_success("OK");
        assert!(state.success.is_some());
        assert!(state.error.is_none());

        state.clear();
        assert!(state.success.is_none());
        assert!(state.error.is_none());
    }
}
