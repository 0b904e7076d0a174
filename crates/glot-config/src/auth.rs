use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Access token settings for the translation endpoints
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Shared token clients must present, empty or absent disables the check
    pub token: Option<SecretString>,
}

impl AuthConfig {
    /// The configured token, treating an empty string as unset
    pub fn access_token(&self) -> Option<&SecretString> {
        self.token.as_ref().filter(|token| !token.expose_secret().is_empty())
    }
}
