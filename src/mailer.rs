//! SMTP delivery of the digest.

use std::io::Write;

use anyhow::{Context, Result};
use lettre::Message;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::transport::smtp::client::{AsyncSmtpConnection, TlsParameters};
use lettre::transport::smtp::extension::ClientId;

use crate::config::SmtpSettings;
use crate::credentials::CredentialProvider;
use crate::digest::EmailMessage;
use crate::output;

const HELLO_NAME: &str = "localhost";

/// Opens authenticated sessions on an SMTP server.
#[allow(async_fn_in_trait)]
pub trait MailTransport {
    type Session: MailSession;

    /// Connects, upgrades the channel with STARTTLS and logs in as `username`.
    async fn open(
        &self,
        settings: &SmtpSettings,
        username: &str,
        password: &str,
    ) -> Result<Self::Session>;
}

/// An authenticated SMTP session.
#[allow(async_fn_in_trait)]
pub trait MailSession {
    async fn send(&mut self, message: &EmailMessage) -> Result<()>;
    /// Ends the session. Called on every exit path once the session is open
    async fn close(&mut self) -> Result<()>;
}

/// STARTTLS SMTP transport. One connection per session, no pooling.
pub struct SmtpMailer;

/// Session over a live lettre connection.
pub struct SmtpSession {
    connection: AsyncSmtpConnection,
}

/// Converts the digest into a plain-text RFC 5322 message.
pub fn build_message(message: &EmailMessage) -> Result<Message> {
    let from: Mailbox = message
        .from
        .parse()
        .context("Invalid sender email address")?;
    let to: Mailbox = message
        .to
        .parse()
        .context("Invalid recipient email address")?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())
        .context("Failed to build email message")
}

async fn secure_and_login(
    connection: &mut AsyncSmtpConnection,
    settings: &SmtpSettings,
    hello: &ClientId,
    credentials: &Credentials,
) -> Result<()> {
    let tls = TlsParameters::new(settings.server.clone()).context("Failed to configure TLS")?;
    connection
        .starttls(tls, hello)
        .await
        .context("Failed to upgrade SMTP connection with STARTTLS")?;
    connection
        .auth(&[Mechanism::Plain, Mechanism::Login], credentials)
        .await
        .context("SMTP authentication failed")?;
    Ok(())
}

impl MailTransport for SmtpMailer {
    type Session = SmtpSession;

    async fn open(
        &self,
        settings: &SmtpSettings,
        username: &str,
        password: &str,
    ) -> Result<SmtpSession> {
        let hello = ClientId::Domain(HELLO_NAME.to_string());
        let mut connection = AsyncSmtpConnection::connect_tokio1(
            (settings.server.as_str(), settings.port),
            None,
            &hello,
            None,
            None,
        )
        .await
        .with_context(|| {
            format!(
                "Failed to connect to SMTP server {}:{}",
                settings.server, settings.port
            )
        })?;

        let credentials = Credentials::new(username.to_string(), password.to_string());
        if let Err(e) = secure_and_login(&mut connection, settings, &hello, &credentials).await {
            connection.abort().await;
            return Err(e);
        }

        tracing::debug!(server = %settings.server, port = settings.port, "SMTP session open");
        Ok(SmtpSession { connection })
    }
}

impl MailSession for SmtpSession {
    async fn send(&mut self, message: &EmailMessage) -> Result<()> {
        let email = build_message(message)?;
        self.connection
            .send(email.envelope(), &email.formatted())
            .await
            .context("Failed to send email via SMTP")?;

        tracing::info!(to = %message.to, subject = %message.subject, "email delivered");
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if let Err(e) = self.connection.quit().await {
            self.connection.abort().await;
            return Err(e).context("Failed to close SMTP session");
        }
        Ok(())
    }
}

/// Prints the message details to the console.
pub fn print_details(
    message: &EmailMessage,
    stdout_additional: &mut Option<&mut dyn Write>,
) -> Result<()> {
    output::println("Email details:", stdout_additional)?;
    output::println(&format!("From: {}", message.from), stdout_additional)?;
    output::println(&format!("To: {}", message.to), stdout_additional)?;
    output::println(&format!("Subject: {}", message.subject), stdout_additional)?;
    output::println(&format!("Body:\n{}", message.body), stdout_additional)?;
    Ok(())
}

async fn print_and_send<S: MailSession>(
    session: &mut S,
    message: &EmailMessage,
    stdout_additional: &mut Option<&mut dyn Write>,
) -> Result<()> {
    print_details(message, stdout_additional)?;
    session.send(message).await
}

/// Asks for the sender's password, logs in, prints the message and sends it.
///
/// Nothing is printed unless login succeeds, and the success line is printed
/// only after the session has been closed cleanly.
pub async fn send_email<P, T>(
    message: &EmailMessage,
    settings: &SmtpSettings,
    credentials: &P,
    transport: &T,
    stdout_additional: &mut Option<&mut dyn Write>,
) -> Result<()>
where
    P: CredentialProvider,
    T: MailTransport,
{
    let password = credentials.password()?;

    let mut session = transport.open(settings, &message.from, &password).await?;
    let sent = print_and_send(&mut session, message, stdout_additional).await;
    let closed = session.close().await;
    sent?;
    closed?;

    output::println("Email sent successfully!", stdout_additional)?;
    Ok(())
}
