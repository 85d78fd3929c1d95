//! Client side of the credential flow: form state, submission, and the
//! notification and navigation events a UI consumes.

pub mod controller;
pub mod error;
pub mod form;
pub mod provider;
pub mod ui;

pub use controller::{FormController, FormStatus, SubmissionOutcome};
pub use error::SubmitError;
pub use form::{FormKind, FormState};
pub use provider::{IdentityProvider, ProviderError, ProviderIdentity};
pub use ui::{Navigator, NavigationError, Notification, Notifier, Variant};
