use serde::Deserialize;

use crate::domain::types::TypeConstraintError;

/// Cookie signing keys are derived from the secret and need this much entropy.
const MIN_SECRET_BYTES: usize = 32;

/// Configuration options for the video collector service.
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:8080`.
    pub bind_address: String,
    /// Secret used to sign the flash-message cookie.
    pub secret: String,
}

impl ServerConfig {
    /// Reject secrets too short to derive a signing key from, before the key
    /// derivation gets a chance to panic.
    pub fn check_secret(&self) -> Result<(), TypeConstraintError> {
        if self.secret.len() < MIN_SECRET_BYTES {
            return Err(TypeConstraintError::InvalidValue(format!(
                "secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }
        Ok(())
    }
}
