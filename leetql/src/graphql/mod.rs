pub mod queries;

use reqwest::header::{COOKIE, REFERER};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::LeetConfig;
use crate::error::{LeetError, Result};
use crate::types::{GraphQlRequest, GraphQlResponse};

/// HTTP client wrapper for the GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct LeetHttpClient {
    client: Client,
    endpoint: Url,
    referer: String,
    session: Option<String>,
}

impl LeetHttpClient {
    pub fn new(config: &LeetConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.graphql_url)?;
        let referer = endpoint.origin().ascii_serialization();
        Ok(Self {
            client: Client::new(),
            endpoint,
            referer,
            session: config.session.clone(),
        })
    }

    /// POST a GraphQL query and return its `data` member.
    pub async fn post_query<V, T>(&self, query: &str, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut req = self
            .client
            .post(self.endpoint.clone())
            .header(REFERER, &self.referer)
            .json(&GraphQlRequest { query, variables });
        if let Some(session) = &self.session {
            req = req.header(COOKIE, format!("LEETCODE_SESSION={session}"));
        }

        let resp = req.send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LeetError::Http {
                status,
                message: body,
            });
        }

        let body = resp.bytes().await?;
        let envelope: GraphQlResponse<T> = serde_json::from_slice(&body)?;

        if let Some(err) = envelope.errors.and_then(|errs| errs.into_iter().next()) {
            return Err(LeetError::GraphQl(err.message));
        }

        envelope
            .data
            .ok_or_else(|| LeetError::MissingData("data".into()))
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}
