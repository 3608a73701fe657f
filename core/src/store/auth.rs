use tracing::info;

use crate::types::User;

/// Demo session holder. Any credentials are accepted and nothing outlives
/// the process.
#[derive(Debug, Default)]
pub struct AuthStore {
    user: Option<User>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in as `email`. The display name is the part before `@`.
    pub fn login(&mut self, email: &str, _password: &str) -> &User {
        let email = email.trim();
        let name = email.split('@').next().unwrap_or(email).to_string();
        info!(%email, "user signed in");
        self.user.insert(User {
            id: 1,
            name,
            email: email.to_string(),
        })
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(email = %user.email, "user signed out");
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
