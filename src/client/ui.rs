//! Side effects the controller emits. A UI layer implements these; tests
//! record them.

/// Where a successful login or popup sign-in lands.
pub const LANDING_ROUTE: &str = "/";
/// Where a successful registration lands.
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

/// A toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("navigation to {route} failed: {reason}")]
pub struct NavigationError {
    pub route: String,
    pub reason: String,
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str) -> Result<(), NavigationError>;
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
