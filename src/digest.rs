//! Renders the pull-request digest and wraps it in an email message.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use comfy_table::{ContentArrangement, Table, TableComponent, presets};

use crate::config::Config;
use crate::github::pulls::PullRequest;
use crate::summary::Summary;

/// Subject line of the digest, also used as the first line of the body.
pub const SUBJECT: &str = "Pull Request Summary";

/// Column headers, in display order.
pub const HEADERS: [&str; 4] = ["PR Title", "State", "User", "Time"];

const API_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A composed plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Converts `2023-04-01T12:00:00Z` into `2023-04-01 12:00:00`.
pub fn format_datetime(datetime: &str) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(datetime, API_TIME_FORMAT)
        .with_context(|| format!("Invalid pull request timestamp {datetime:?}"))?;
    Ok(parsed.format(DISPLAY_TIME_FORMAT).to_string())
}

/// Renders the pull requests as a grid table, one row per pull request.
pub fn render_table(pull_requests: &[PullRequest]) -> Result<String> {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL)
        .set_style(TableComponent::MiddleHeaderIntersections, '+')
        .set_style(TableComponent::LeftBorderIntersections, '+')
        .set_style(TableComponent::RightBorderIntersections, '+')
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADERS);

    for pr in pull_requests {
        let created_at = format_datetime(&pr.created_at)
            .with_context(|| format!("Failed to format pull request {:?}", pr.title))?;
        table.add_row(vec![
            pr.title.clone(),
            pr.state.to_string(),
            pr.user.login.clone(),
            created_at,
        ]);
    }

    Ok(table.to_string())
}

/// Builds the digest email.
///
/// The summary is not part of the body; callers print it separately.
pub fn generate_email(
    pull_requests: &[PullRequest],
    _summary: &Summary,
    config: &Config,
) -> Result<EmailMessage> {
    let table = render_table(pull_requests)?;

    Ok(EmailMessage {
        from: config.sender_email.clone(),
        to: config.recipient_email.clone(),
        subject: SUBJECT.to_string(),
        body: format!("{SUBJECT}\n{table}"),
    })
}
