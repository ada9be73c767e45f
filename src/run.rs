use crate::cli;
use crate::config::Config;
use crate::credentials::CredentialProvider;
use crate::digest::{self, EmailMessage};
use crate::github::fetch;
use crate::mailer::{self, MailTransport};
use crate::output;
use crate::summary::{self, Summary};

pub async fn run<F, P, T>(
    args: Vec<String>,
    lookup: F,
    credentials: &P,
    transport: &T,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
    P: CredentialProvider,
    T: MailTransport,
{
    match cli::parser::parse_args(&args) {
        cli::parser::Command::Send => {
            let config = Config::from_lookup(lookup)?;
            let (email, summary) = prepare_digest(&config).await?;

            mailer::send_email(
                &email,
                &config.smtp,
                credentials,
                transport,
                &mut stdout_additional,
            )
            .await?;

            print_counts(&summary, &mut stdout_additional)?;
        }
        cli::parser::Command::Preview => {
            let config = Config::from_lookup(lookup)?;
            let (email, summary) = prepare_digest(&config).await?;

            mailer::print_details(&email, &mut stdout_additional)?;
            print_counts(&summary, &mut stdout_additional)?;
        }
        cli::parser::Command::Help => {
            output::println(cli::parser::USAGE, &mut stdout_additional)?;
        }
        cli::parser::Command::Unknown(cmd) => {
            return Err(anyhow::anyhow!(
                "Unknown command {cmd}. Use `help` for usage."
            ));
        }
    }
    Ok(())
}

/// Fetches, counts and formats. Nothing is composed if any step fails.
async fn prepare_digest(config: &Config) -> anyhow::Result<(EmailMessage, Summary)> {
    let client = anyhow::Context::context(
        reqwest::Client::builder().build(),
        "Failed to create HTTP client",
    )?;

    let pull_requests = fetch::fetch_pull_requests(&client, config).await?;
    let summary = summary::summarize(&pull_requests);
    let email = digest::generate_email(&pull_requests, &summary, config)?;
    Ok((email, summary))
}

fn print_counts(
    summary: &Summary,
    stdout_additional: &mut Option<&mut dyn std::io::Write>,
) -> std::io::Result<()> {
    output::println(
        &format!("Open Pull Requests: {}", summary.open),
        stdout_additional,
    )?;
    output::println(
        &format!("Closed Pull Requests: {}", summary.closed),
        stdout_additional,
    )
}
