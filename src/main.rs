use pr_digest::credentials::PromptCredentials;
use pr_digest::mailer::SmtpMailer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    pr_digest::config::load_dotenv()?;

    let args: Vec<String> = std::env::args().collect();
    pr_digest::run::run(
        args,
        |key| std::env::var(key).ok(),
        &PromptCredentials,
        &SmtpMailer,
        None,
    )
    .await
}
