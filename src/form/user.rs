use serde::{Deserialize, Serialize};

use crate::database::model::user::NewUser;

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterFormData {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

impl From<RegisterFormData> for NewUser {
    fn from(form: RegisterFormData) -> Self {
        NewUser::new(form.name, form.email, form.phone_number, form.password)
    }
}
