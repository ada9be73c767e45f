use crate::config::Config;
use crate::github::pulls::PullRequest;
use anyhow::{Context, Result};

const USER_AGENT: &str = "pr-digest";

/// URL of the pull-request listing for `owner/name`.
pub fn pulls_url(api_base_url: &str, owner: &str, name: &str) -> String {
    format!(
        "{}/repos/{}/{}/pulls",
        api_base_url.trim_end_matches('/'),
        owner,
        name
    )
}

/// Decodes a `/pulls` response body.
///
/// Every element must carry `title`, `state`, `user.login` and `created_at`;
/// a single malformed element fails the whole body.
pub fn parse_pull_requests(body: &str) -> Result<Vec<PullRequest>> {
    serde_json::from_str::<Vec<PullRequest>>(body).context("Failed to parse pull request list")
}

/// Lists every pull request (open and closed) of the configured repository.
///
/// Only the first page the API returns is read.
pub async fn fetch_pull_requests(
    client: &reqwest::Client,
    config: &Config,
) -> Result<Vec<PullRequest>> {
    let url = pulls_url(&config.api_base_url, &config.repo_owner, &config.repo_name);
    tracing::debug!(%url, "requesting pull requests");

    let response = client
        .get(&url)
        .query(&[("state", "all")])
        .header("Accept", "application/vnd.github+json")
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .context("Failed to request pull requests")?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "Failed to list pull requests: HTTP {}",
            response.status()
        ));
    }

    let text = response
        .text()
        .await
        .context("Failed to read pull request response")?;
    let pull_requests = parse_pull_requests(&text)?;
    tracing::info!(
        owner = %config.repo_owner,
        repo = %config.repo_name,
        count = pull_requests.len(),
        "fetched pull requests"
    );
    Ok(pull_requests)
}
