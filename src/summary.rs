use crate::github::pulls::{PullRequest, PullState};

/// Open/closed tally over a pull-request list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub open: usize,
    pub closed: usize,
}

/// Counts pull requests by state. States other than open/closed are counted
/// in neither bucket.
pub fn summarize(pull_requests: &[PullRequest]) -> Summary {
    pull_requests
        .iter()
        .fold(Summary::default(), |mut summary, pr| {
            match pr.state {
                PullState::Open => summary.open += 1,
                PullState::Closed => summary.closed += 1,
                PullState::Other(_) => (),
            }
            summary
        })
}
