use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LeetError, Result};
use crate::graphql::LeetHttpClient;
use crate::types::SubmissionPage;

/// Submission history of the user owning the session cookie, newest first.
pub const SUBMISSION_LIST_QUERY: &str = r#"
query submissionList($offset: Int, $limit: Int) {
    submissionList(offset: $offset, limit: $limit) {
        lastKey
        hasNext
        submissions {
            id
            title
            titleSlug
            status
            statusDisplay
            lang
            runtime
            timestamp
            url
        }
    }
}
"#;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubmissionListVariables {
    pub offset: u32,
    pub limit: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionListData {
    submission_list: Option<SubmissionPage>,
}

impl LeetHttpClient {
    /// `submissionList(offset, limit)` - one page of the session user's submissions.
    pub async fn get_submission_list(&self, offset: u32, limit: u32) -> Result<SubmissionPage> {
        debug!(offset, limit, "querying submissionList");
        let data: SubmissionListData = self
            .post_query(
                SUBMISSION_LIST_QUERY,
                SubmissionListVariables { offset, limit },
            )
            .await?;
        data.submission_list
            .ok_or_else(|| LeetError::MissingData("submissionList".into()))
    }
}
