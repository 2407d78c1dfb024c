pub mod graphql;
pub mod submission;

pub use graphql::*;
pub use submission::*;
