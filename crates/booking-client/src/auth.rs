//! Authentication provider contract and the sign-in flow.

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::AuthError;
use crate::messages::redact;
use crate::types::User;

/// An external authentication provider.
///
/// The data layer only ever reads `current_user().id`; the provider owns the
/// user's lifecycle.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<User>;

    /// Start the Google sign-in flow.
    async fn sign_in_with_google(&self) -> Result<User, AuthError>;

    /// Sign the current user out.
    ///
    /// Default implementation does nothing.
    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Provider with a fixed user, for tooling and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthProvider {
    user: Option<User>,
}

impl StaticAuthProvider {
    /// Provider that is signed in as `user`.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Provider with nobody signed in. Sign-in attempts are cancelled.
    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }

    async fn sign_in_with_google(&self) -> Result<User, AuthError> {
        self.user.clone().ok_or(AuthError::Cancelled)
    }
}

/// Loading state of a sign-in button.
#[derive(Debug, Default)]
pub struct SignInFlow {
    is_loading: bool,
}

impl SignInFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a sign-in attempt is in progress.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Run the Google sign-in flow.
    ///
    /// Provider failures are logged and reset the loading state; the provider
    /// shows its own feedback, so nothing is returned to the caller but `None`.
    pub async fn sign_in_with_google(&mut self, provider: &dyn AuthProvider) -> Option<User> {
        self.is_loading = true;
        let result = provider.sign_in_with_google().await;
        self.is_loading = false;

        match result {
            Ok(user) => {
                info!(user_id = %user.id, "Signed in with Google");
                Some(user)
            }
            Err(e) => {
                error!(error = %redact(&e.to_string()), "Google sign-in failed");
                None
            }
        }
    }
}
