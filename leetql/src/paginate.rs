//! Offset pagination over `submissionList`.
//!
//! [`fetch_all`] walks the history one page at a time, strictly sequentially,
//! and returns the pages concatenated in the order the service produced them.

use std::future::Future;
use std::time::Duration;

use tracing::info;

use crate::error::{LeetError, Result};
use crate::graphql::LeetHttpClient;
use crate::types::{Submission, SubmissionPage};

/// Records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Pause between two page requests.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(300);

/// Anything that can serve one page of submissions for an `(offset, limit)` window.
pub trait SubmissionSource {
    fn fetch_page(
        &self,
        offset: u32,
        limit: u32,
    ) -> impl Future<Output = Result<SubmissionPage>> + Send;
}

impl SubmissionSource for LeetHttpClient {
    fn fetch_page(
        &self,
        offset: u32,
        limit: u32,
    ) -> impl Future<Output = Result<SubmissionPage>> + Send {
        self.get_submission_list(offset, limit)
    }
}

/// Tuning for [`fetch_all`].
#[derive(Debug, Clone)]
pub struct PaginateOptions {
    /// `limit` sent with every request; the offset also advances by this much.
    pub page_size: u32,
    /// Sleep between pages. Not applied after the last page.
    pub delay: Duration,
}

impl Default for PaginateOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            delay: DEFAULT_PAGE_DELAY,
        }
    }
}

/// Fetch every page until the service reports `hasNext = false`.
///
/// The offset moves forward by `page_size` after each page even when the page
/// came back short, so a server that trims pages while still signalling more
/// results will have records skipped.
///
/// # Errors
///
/// Returns the first page error as-is; records gathered before it are dropped.
/// Returns [`LeetError::Validation`] for a zero page size.
pub async fn fetch_all<S>(source: &S, options: &PaginateOptions) -> Result<Vec<Submission>>
where
    S: SubmissionSource,
{
    if options.page_size == 0 {
        return Err(LeetError::Validation("page size must be positive".into()));
    }

    let mut submissions = Vec::new();
    let mut offset: u32 = 0;
    let mut has_next = true;

    while has_next {
        let page = source.fetch_page(offset, options.page_size).await?;
        let fetched = page.submissions.len();
        submissions.extend(page.submissions);
        has_next = page.has_next;

        info!(
            offset,
            fetched,
            total = submissions.len(),
            "fetched page"
        );

        if has_next {
            offset = offset.checked_add(options.page_size).ok_or_else(|| {
                LeetError::Validation(format!("offset overflow after {offset}"))
            })?;
            if !options.delay.is_zero() {
                tokio::time::sleep(options.delay).await;
            }
        }
    }

    Ok(submissions)
}
