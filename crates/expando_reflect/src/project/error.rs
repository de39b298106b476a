use thiserror::Error;

use crate::ops::RecordError;

/// An error returned by [`ObjectProjector::project`](crate::project::ObjectProjector::project).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProjectError {
    /// The source is an empty `Option`.
    #[error("cannot project an absent value")]
    NullSource,

    /// Writing into the output record failed, e.g. an enumerator yielded a
    /// field name twice.
    #[error(transparent)]
    Record(#[from] RecordError),
}
