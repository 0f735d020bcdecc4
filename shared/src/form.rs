use crate::types::{CountryCode, Identifier, SignInMode};

/// Everything the member has typed into the sign-in card.
///
/// Email and phone values are kept side by side so switching tabs never
/// loses what was entered under the other one. Only [`FormState::identifier`]
/// decides which of them counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: SignInMode,
    pub email: String,
    pub phone: String,
    pub country_code: CountryCode,
    pub password: String,
    pub password_visible: bool,
    pub remember_me: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mode: SignInMode::default(),
            email: String::new(),
            phone: String::new(),
            country_code: CountryCode::default(),
            password: String::new(),
            password_visible: false,
            remember_me: true,
        }
    }
}

/// A single user edit to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SelectMode(SignInMode),
    SetEmail(String),
    SetPhone(String),
    SetCountryCode(CountryCode),
    SetPassword(String),
    TogglePasswordVisibility,
    ToggleRememberMe,
}

impl FormState {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SelectMode(mode) => self.mode = mode,
            FormAction::SetEmail(email) => self.email = email,
            FormAction::SetPhone(phone) => self.phone = phone,
            FormAction::SetCountryCode(code) => self.country_code = code,
            FormAction::SetPassword(password) => self.password = password,
            FormAction::TogglePasswordVisibility => self.password_visible = !self.password_visible,
            FormAction::ToggleRememberMe => self.remember_me = !self.remember_me,
        }
    }

    pub fn identifier(&self) -> Identifier<'_> {
        match self.mode {
            SignInMode::Email => Identifier::Email(&self.email),
            SignInMode::Phone => Identifier::Phone {
                country_code: self.country_code,
                number: &self.phone,
            },
        }
    }

    /// The `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    pub fn password_toggle_label(&self) -> &'static str {
        if self.password_visible {
            "Hide password"
        } else {
            "Show password"
        }
    }
}
