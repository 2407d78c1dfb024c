use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LeetError, Result};

/// One entry of a user's submission history.
///
/// Field names match the wire shape so a dump written back to disk keeps them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub title: String,
    pub title_slug: String,
    pub status: i32,
    pub status_display: String,
    pub lang: String,
    pub runtime: String,
    pub timestamp: Timestamp,
    pub url: String,
}

/// Unix timestamp in seconds, kept in whatever form the service sent it.
///
/// The API serves timestamps as decimal strings (`"1609459200"`), older dumps may hold
/// plain numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Number(i64),
    Text(String),
}

impl Timestamp {
    /// Seconds since the Unix epoch.
    pub fn as_secs(&self) -> Result<i64> {
        match self {
            Timestamp::Number(secs) => Ok(*secs),
            Timestamp::Text(raw) => raw
                .trim()
                .parse()
                .map_err(|_| LeetError::Validation(format!("invalid timestamp: {raw:?}"))),
        }
    }

    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        let secs = self.as_secs()?;
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| LeetError::Validation(format!("timestamp out of range: {secs}")))
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp::Number(secs)
    }
}

/// One page of `submissionList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPage {
    pub last_key: Option<String>,
    pub has_next: bool,
    pub submissions: Vec<Submission>,
}
