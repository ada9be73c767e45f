use cucumber::World;
use pr_digest::digest::EmailMessage;
use std::collections::HashMap;
use std::fmt;
use wiremock::MockServer;

/// Mock GitHub API kept alive for the whole scenario
pub struct MockApi(pub MockServer);

impl fmt::Debug for MockApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MockApi").field(&self.0.uri()).finish()
    }
}

#[derive(Debug, Default, World)]
pub struct DigestWorld {
    pub mock_api: Option<MockApi>,
    pub env: HashMap<String, String>,
    pub smtp_failure: Option<String>,
    pub captured_output: Vec<u8>,
    pub run_result: Option<Result<(), anyhow::Error>>,
    pub delivered: Vec<EmailMessage>,
    pub sessions_closed: usize,
    pub password_requests: usize,
}

#[tokio::main]
async fn main() {
    DigestWorld::run("features").await;
}
