use anyhow::{Context, Result, bail};

/// Configuration keys enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    RepoOwner,
    RepoName,
    SenderEmail,
    RecipientEmail,
    SmtpServer,
    SmtpPort,
    GithubApiUrl,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::RepoOwner => "REPO_OWNER",
            ConfigKey::RepoName => "REPO_NAME",
            ConfigKey::SenderEmail => "SENDER_EMAIL",
            ConfigKey::RecipientEmail => "RECIPIENT_EMAIL",
            ConfigKey::SmtpServer => "SMTP_SERVER",
            ConfigKey::SmtpPort => "SMTP_PORT",
            ConfigKey::GithubApiUrl => "GITHUB_API_URL",
        }
    }

    /// Keys that must be present for a run.
    pub fn required() -> &'static [ConfigKey] {
        &[
            ConfigKey::RepoOwner,
            ConfigKey::RepoName,
            ConfigKey::SenderEmail,
            ConfigKey::RecipientEmail,
            ConfigKey::SmtpServer,
            ConfigKey::SmtpPort,
        ]
    }
}

/// Base URL of the GitHub REST API used when `GITHUB_API_URL` is unset.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// SMTP endpoint the digest is sent through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub server: String,
    pub port: u16,
}

/// Settings for a single digest run, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repo_owner: String,
    pub repo_name: String,
    pub sender_email: String,
    pub recipient_email: String,
    pub smtp: SmtpSettings,
    pub api_base_url: String,
}

impl Config {
    /// Builds a configuration from a key lookup.
    ///
    /// - Returns an `Err` listing every missing key from [`ConfigKey::required`].
    /// - Returns an `Err` if `SMTP_PORT` is not a valid port number.
    /// - `GITHUB_API_URL` is optional and falls back to [`DEFAULT_GITHUB_API_URL`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<&str> = ConfigKey::required()
            .iter()
            .map(ConfigKey::as_str)
            .filter(|key| lookup(key).is_none())
            .collect();
        if !missing.is_empty() {
            bail!("Missing environment variables: {}", missing.join(", "));
        }

        let get = |key: ConfigKey| {
            lookup(key.as_str())
                .with_context(|| format!("{} environment variable not set", key.as_str()))
        };

        let port_text = get(ConfigKey::SmtpPort)?;
        let port = port_text.trim().parse::<u16>().with_context(|| {
            format!(
                "{} must be a port number, got {:?}",
                ConfigKey::SmtpPort.as_str(),
                port_text
            )
        })?;

        Ok(Self {
            repo_owner: get(ConfigKey::RepoOwner)?,
            repo_name: get(ConfigKey::RepoName)?,
            sender_email: get(ConfigKey::SenderEmail)?,
            recipient_email: get(ConfigKey::RecipientEmail)?,
            smtp: SmtpSettings {
                server: get(ConfigKey::SmtpServer)?,
                port,
            },
            api_base_url: lookup(ConfigKey::GithubApiUrl.as_str())
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
        })
    }
}

/// Loads a `.env` file from the working directory into the process
/// environment. A missing file is not an error.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}
