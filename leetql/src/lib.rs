pub mod config;
pub mod error;
pub mod graphql;
pub mod paginate;
pub mod report;
pub mod store;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use config::LeetConfig;
pub use error::{LeetError, Result};
pub use graphql::LeetHttpClient;

// Pagination
pub use paginate::{fetch_all, PaginateOptions, SubmissionSource};

// Wire types
pub use types::{GraphQlError, GraphQlResponse, Submission, SubmissionPage, Timestamp};

// Sinks
pub use report::{render_year_table, submissions_by_year};
pub use store::{read_submissions, write_submissions};
