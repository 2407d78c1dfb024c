use std::fmt;

/// Default GraphQL endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://leetcode.com/graphql";

/// Configuration for the GraphQL client.
#[derive(Clone)]
pub struct LeetConfig {
    /// Full URL of the GraphQL endpoint (e.g. `https://leetcode.com/graphql`).
    pub graphql_url: String,
    /// Value of the `LEETCODE_SESSION` cookie. Requests go out anonymously when unset.
    pub session: Option<String>,
}

impl Default for LeetConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.into(),
            session: None,
        }
    }
}

// Keep the session cookie out of logs.
impl fmt::Debug for LeetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeetConfig")
            .field("graphql_url", &self.graphql_url)
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
