#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use authgate::client::{
    FormController, FormKind, IdentityProvider, NavigationError, Navigator, Notification,
    Notifier, ProviderError, ProviderIdentity,
};

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) -> Result<(), NavigationError> {
        self.routes.lock().unwrap().push(route.to_string());
        Ok(())
    }
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

impl RecordingNotifier {
    pub fn last(&self) -> Notification {
        self.notifications
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no notification was shown")
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

/// Records the loading flag as it stands whenever a notification is shown.
#[derive(Default)]
pub struct LoadingObserver {
    pub flag: OnceLock<Arc<AtomicBool>>,
    pub seen: Mutex<Vec<bool>>,
}

impl Notifier for LoadingObserver {
    fn notify(&self, _notification: Notification) {
        let loading = self
            .flag
            .get()
            .map_or(false, |flag| flag.load(Ordering::SeqCst));
        self.seen.lock().unwrap().push(loading);
    }
}

impl LoadingObserver {
    pub fn seen(&self) -> Vec<bool> {
        self.seen.lock().unwrap().clone()
    }
}

pub struct PanickingNavigator;

impl Navigator for PanickingNavigator {
    fn navigate(&self, _route: &str) -> Result<(), NavigationError> {
        panic!("router is gone");
    }
}

pub struct FailingNavigator;

impl Navigator for FailingNavigator {
    fn navigate(&self, route: &str) -> Result<(), NavigationError> {
        Err(NavigationError {
            route: route.to_string(),
            reason: "no such route".to_string(),
        })
    }
}

pub struct FakeProvider {
    pub succeed: bool,
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    fn name(&self) -> &str {
        "Google"
    }

    async fn sign_in_with_popup(&self) -> Result<ProviderIdentity, ProviderError> {
        if self.succeed {
            Ok(ProviderIdentity {
                uid: "uid-1".to_string(),
                email: Some("a@b.com".to_string()),
                display_name: Some("Ada".to_string()),
            })
        } else {
            Err(ProviderError::PopupClosed)
        }
    }
}

pub struct Harness {
    pub controller: FormController,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn harness(kind: FormKind, base_url: &str) -> Harness {
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = FormController::new(
        kind,
        reqwest::Client::new(),
        base_url,
        navigator.clone(),
        notifier.clone(),
    );

    Harness {
        controller,
        navigator,
        notifier,
    }
}
