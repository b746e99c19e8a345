use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("summary must not be empty")]
    EmptySummary,
}
