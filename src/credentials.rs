use anyhow::{Context, Result};

/// Source of the SMTP password for the sending account
pub trait CredentialProvider {
    /// Return the password. Never cached or persisted
    fn password(&self) -> Result<String>;
}

/// Prompt shown when asking for the sending account's password.
pub const PASSWORD_PROMPT: &str = "Enter the email password: ";

/// Reads the password from the terminal without echoing it
pub struct PromptCredentials;

impl CredentialProvider for PromptCredentials {
    fn password(&self) -> Result<String> {
        rpassword::prompt_password(PASSWORD_PROMPT).context("Failed to read email password")
    }
}

/// Returns a fixed password, for non-interactive callers
pub struct FixedCredentials(pub String);

impl CredentialProvider for FixedCredentials {
    fn password(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
