use serde::Deserialize;
use std::fmt;

/// A pull request as returned by the GitHub `/pulls` listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub title: String,
    pub state: PullState,
    pub user: User,
    /// Creation time, `YYYY-MM-DDTHH:MM:SSZ`.
    pub created_at: String,
}

/// Author of a pull request.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub login: String,
}

/// Lifecycle state of a pull request.
///
/// Values other than `open` and `closed` are kept verbatim in `Other` so they
/// still show up in the digest table.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String")]
pub enum PullState {
    Open,
    Closed,
    Other(String),
}

impl From<String> for PullState {
    fn from(state: String) -> Self {
        match state.as_str() {
            "open" => PullState::Open,
            "closed" => PullState::Closed,
            _ => PullState::Other(state),
        }
    }
}

impl fmt::Display for PullState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PullState::Open => f.write_str("open"),
            PullState::Closed => f.write_str("closed"),
            PullState::Other(state) => f.write_str(state),
        }
    }
}
