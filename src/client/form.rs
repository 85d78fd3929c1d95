use std::collections::HashMap;

use crate::client::ui::{LANDING_ROUTE, LOGIN_ROUTE};
use crate::form::user::{LoginFormData, RegisterFormData};

const LOGIN_FIELDS: &[&str] = &["email", "password"];
const REGISTER_FIELDS: &[&str] = &["name", "email", "phoneNumber", "password"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    /// Field ids the form declares as required.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Login => LOGIN_FIELDS,
            FormKind::Register => REGISTER_FIELDS,
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            FormKind::Login => "/api/v1/user/login",
            FormKind::Register => "/api/v1/user/register",
        }
    }

    pub fn success_route(self) -> &'static str {
        match self {
            FormKind::Login => LANDING_ROUTE,
            FormKind::Register => LOGIN_ROUTE,
        }
    }

    pub(crate) fn success_title(self) -> &'static str {
        match self {
            FormKind::Login => "Login Successful",
            FormKind::Register => "Registration Successful",
        }
    }

    pub(crate) fn success_description(self) -> &'static str {
        match self {
            FormKind::Login => "Welcome back!",
            FormKind::Register => "Your account has been created.",
        }
    }

    pub(crate) fn failure_title(self) -> &'static str {
        match self {
            FormKind::Login => "Login Failed",
            FormKind::Register => "Registration Failed",
        }
    }

    /// Used when the server rejects a submission without a readable message.
    pub(crate) fn rejected_message(self) -> &'static str {
        match self {
            FormKind::Login => "Login failed",
            FormKind::Register => "Registration failed",
        }
    }

    /// Used when the request never produced a response.
    pub(crate) fn generic_message(self) -> &'static str {
        match self {
            FormKind::Login => "There was a problem logging in.",
            FormKind::Register => "There was a problem creating your account.",
        }
    }
}

/// Current value of every field the user has touched.
#[derive(Debug, Default, Clone)]
pub struct FormState {
    fields: HashMap<String, String>,
}

impl FormState {
    pub fn set(&mut self, field_id: &str, value: impl Into<String>) {
        self.fields.insert(field_id.to_string(), value.into());
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.fields.get(field_id).map(String::as_str)
    }

    /// First required field that is absent or empty.
    pub fn missing_field(&self, required: &[&'static str]) -> Option<&'static str> {
        required
            .iter()
            .copied()
            .find(|field| self.get(field).map_or(true, str::is_empty))
    }

    fn value(&self, field_id: &str) -> String {
        self.get(field_id).unwrap_or_default().to_string()
    }

    pub fn login_form(&self) -> LoginFormData {
        LoginFormData {
            email: self.value("email"),
            password: self.value("password"),
        }
    }

    pub fn register_form(&self) -> RegisterFormData {
        RegisterFormData {
            name: self.value("name"),
            email: self.value("email"),
            phone_number: self.value("phoneNumber"),
            password: self.value("password"),
        }
    }
}
