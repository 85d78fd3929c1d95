use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::Deserialize;
use serde_json::Value;

use crate::client::error::SubmitError;
use crate::client::form::{FormKind, FormState};
use crate::client::provider::{IdentityProvider, ProviderError};
use crate::client::ui::{Navigator, Notification, Notifier, LANDING_ROUTE};
use crate::config::{ClientConfig, ProviderCredentials};

/// Result of one submission. Exactly one is produced per call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success { message: String, user: Option<Value> },
    Failure { message: String },
}

/// Terminal UI state after the last submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitted,
    Failed,
}

#[derive(Deserialize)]
struct SuccessBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Clears the loading flag when dropped, including during unwinding.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Drives a login or registration form.
///
/// The HTTP client, navigator, notifier and identity provider are all passed
/// in by the caller. `on_submit` takes `&self`, so overlapping submissions are
/// possible; the loading flag reflects in-flight state but does not cancel or
/// reject a second request.
pub struct FormController {
    kind: FormKind,
    state: FormState,
    http: reqwest::Client,
    api_base_url: String,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
    loading: Arc<AtomicBool>,
    status: Mutex<FormStatus>,
}

impl FormController {
    pub fn new(
        kind: FormKind,
        http: reqwest::Client,
        api_base_url: impl Into<String>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            kind,
            state: FormState::default(),
            http,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            navigator,
            notifier,
            identity_provider: None,
            loading: Arc::new(AtomicBool::new(false)),
            status: Mutex::new(FormStatus::Idle),
        }
    }

    /// Builds a controller from client configuration. `make_provider` is only
    /// called when identity provider credentials are configured.
    pub fn from_config<F>(
        kind: FormKind,
        http: reqwest::Client,
        config: &ClientConfig,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        make_provider: F,
    ) -> Self
    where
        F: FnOnce(&ProviderCredentials) -> Arc<dyn IdentityProvider>,
    {
        let controller = Self::new(kind, http, config.api_base_url.clone(), navigator, notifier);

        match &config.identity_provider {
            Some(credentials) => controller.with_identity_provider(make_provider(credentials)),
            None => controller,
        }
    }

    pub fn with_identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Shared handle to the loading flag, for a UI that disables buttons.
    pub fn loading_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.loading)
    }

    pub fn status(&self) -> FormStatus {
        self.status
            .lock()
            .map(|status| *status)
            .unwrap_or(FormStatus::Idle)
    }

    pub fn on_field_change(&mut self, field_id: &str, value: impl Into<String>) {
        self.state.set(field_id, value);
    }

    pub async fn on_submit(&self) -> SubmissionOutcome {
        if let Some(field) = self.state.missing_field(self.kind.fields()) {
            return self.finish(Err(SubmitError::MissingField(field)));
        }

        let _loading = LoadingGuard::raise(&self.loading);
        let result = self.exchange().await;

        self.finish(result)
    }

    /// Popup sign-in through the injected identity provider.
    pub async fn sign_in_with_popup(&self) -> SubmissionOutcome {
        let _loading = LoadingGuard::raise(&self.loading);

        let (name, result) = match &self.identity_provider {
            Some(provider) => (provider.name().to_string(), provider.sign_in_with_popup().await),
            None => ("Popup".to_string(), Err(ProviderError::NotConfigured)),
        };

        match result {
            Ok(identity) => {
                log::debug!("popup sign-in succeeded for {}", identity.uid);
                self.set_status(FormStatus::Submitted);
                self.notifier.notify(Notification::success(
                    format!("{name} Login Successful"),
                    "Welcome back!",
                ));
                self.navigate(LANDING_ROUTE);

                SubmissionOutcome::Success {
                    message: "Welcome back!".to_string(),
                    user: serde_json::to_value(&identity).ok(),
                }
            }
            Err(err) => {
                log::error!("{name} login error: {err}");
                let message = format!("There was a problem logging in with {name}.");
                self.set_status(FormStatus::Failed);
                self.notifier.notify(Notification::failure(
                    format!("{name} Login Failed"),
                    message.clone(),
                ));

                SubmissionOutcome::Failure { message }
            }
        }
    }

    async fn exchange(&self) -> Result<SuccessBody, SubmitError> {
        let url = format!("{}{}", self.api_base_url, self.kind.endpoint());
        let request = self.http.post(&url);
        let request = match self.kind {
            FormKind::Login => request.json(&self.state.login_form()),
            FormKind::Register => request.json(&self.state.register_form()),
        };

        let response = request.send().await.map_err(SubmitError::Transport)?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(ErrorBody {
                    message: Some(message),
                }) if !message.is_empty() => message,
                Ok(_) => self.kind.rejected_message().to_string(),
                Err(err) => {
                    log::error!("error parsing JSON: {err}");
                    self.kind.rejected_message().to_string()
                }
            };

            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<SuccessBody>().await.map_err(SubmitError::Decode)
    }

    fn finish(&self, result: Result<SuccessBody, SubmitError>) -> SubmissionOutcome {
        match result {
            Ok(body) => {
                log::debug!("{:?} submission succeeded", self.kind);
                self.set_status(FormStatus::Submitted);
                self.notifier.notify(Notification::success(
                    self.kind.success_title(),
                    self.kind.success_description(),
                ));
                self.navigate(self.kind.success_route());

                SubmissionOutcome::Success {
                    message: body
                        .message
                        .unwrap_or_else(|| self.kind.success_description().to_string()),
                    user: body.user,
                }
            }
            Err(err) => {
                log::error!("{:?} submission error: {err}", self.kind);
                let message = err.user_message(self.kind);
                self.set_status(FormStatus::Failed);
                self.notifier.notify(Notification::failure(
                    self.kind.failure_title(),
                    message.clone(),
                ));

                SubmissionOutcome::Failure { message }
            }
        }
    }

    fn navigate(&self, route: &str) {
        if let Err(err) = self.navigator.navigate(route) {
            log::error!("{err}");
        }
    }

    fn set_status(&self, status: FormStatus) {
        if let Ok(mut current) = self.status.lock() {
            *current = status;
        }
    }
}
