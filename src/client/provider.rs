use async_trait::async_trait;
use serde::Serialize;

/// Identity returned by a successful popup sign-in.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderIdentity {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no identity provider is configured")]
    NotConfigured,

    #[error("popup was closed before sign-in completed")]
    PopupClosed,

    #[error("identity provider error: {0}")]
    Provider(String),
}

/// A third-party, popup-based sign-in capability.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Display name used in notifications, e.g. "Google".
    fn name(&self) -> &str;

    async fn sign_in_with_popup(&self) -> Result<ProviderIdentity, ProviderError>;
}
