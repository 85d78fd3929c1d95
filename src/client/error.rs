use crate::client::form::FormKind;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("required field {0} is empty")]
    MissingField(&'static str),

    #[error("server rejected submission with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl SubmitError {
    /// Text for the failure notification.
    pub fn user_message(&self, kind: FormKind) -> String {
        match self {
            SubmitError::MissingField(field) => format!("Please fill in the {field} field."),
            SubmitError::Rejected { message, .. } => message.clone(),
            SubmitError::Transport(_) => kind.generic_message().to_string(),
            SubmitError::Decode(err) => err.to_string(),
        }
    }
}
