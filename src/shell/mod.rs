//! Navigation and form-visibility state for the signed-in view, plus the
//! login/register toggle. No DOM access here; the pages feed events in and
//! act on what comes back.

use crate::api::ApiClient;
use crate::models::Section;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shell {
    active: Section,
    /// At most one create form is open across all sections.
    open_form: Option<Section>,
}

impl Shell {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn open_form(&self) -> Option<Section> {
        self.open_form
    }

    pub fn is_form_open(&self, section: Section) -> bool {
        self.open_form == Some(section)
    }

    /// Switch tabs. Closes any open form; the caller loads `section`.
    pub fn select(&mut self, section: Section) -> Section {
        self.active = section;
        self.open_form = None;
        section
    }

    /// Returns `true` when the form was opened and its first field should
    /// take focus.
    pub fn toggle_form(&mut self, section: Section) -> bool {
        if self.is_form_open(section) {
            self.open_form = None;
            false
        } else {
            self.open_form = Some(section);
            true
        }
    }

    pub fn close_forms(&mut self) {
        self.open_form = None;
    }

    pub fn on_key(&mut self, key: &KeyPress) -> Option<ShortcutAction> {
        if key.is_submit() {
            return self
                .open_form
                .filter(|s| *s == self.active)
                .map(ShortcutAction::Submit);
        }
        if key.key == "Escape" {
            self.close_forms();
            return Some(ShortcutAction::CloseForms);
        }
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    #[cfg(test)]
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[cfg(test)]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    fn is_submit(&self) -> bool {
        (self.ctrl || self.meta) && self.key == "Enter"
    }
}

impl From<&web_sys::KeyboardEvent> for KeyPress {
    fn from(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    Submit(Section),
    CloseForms,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMessage {
    Error(String),
    Success(String),
}

pub(crate) const REGISTERED_MESSAGE: &str = "Registration successful! Please login.";
pub(crate) const MISSING_CREDENTIALS: &str = "Please fill in all fields";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub view: AuthView,
    pub message: Option<AuthMessage>,
}

impl AuthState {
    pub fn show_login(&mut self) {
        self.view = AuthView::Login;
        self.message = None;
    }

    pub fn show_register(&mut self) {
        self.view = AuthView::Register;
        self.message = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.message = Some(AuthMessage::Error(message.into()));
    }

    pub fn registered(&mut self) {
        self.show_login();
        self.message = Some(AuthMessage::Success(REGISTERED_MESSAGE.to_string()));
    }
}

/// Trimmed email and raw password, or the inline error to show.
pub fn credentials(email: &str, password: &str) -> Result<(String, String), String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS.to_string());
    }
    Ok((email.to_string(), password.to_string()))
}

/// Confirm, then drop the session. Returns whether the user signed out.
pub fn logout(api: &ApiClient) -> bool {
    if !api.dialogs().confirm("Are you sure you want to logout?") {
        return false;
    }
    api.logout();
    true
}
