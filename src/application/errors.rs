use crate::core::portfolio::aggregate::PortfolioError;
use crate::core::ports::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] PortfolioError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Coarse classification for transport layers (conflict, bad request, not found, everything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Conflict,
    NotFound,
    Internal,
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::Domain(PortfolioError::InvalidName) => ErrorKind::BadRequest,
            ApplicationError::Repository(RepositoryError::DuplicateName(_)) => ErrorKind::Conflict,
            ApplicationError::Repository(RepositoryError::NotFound) => ErrorKind::NotFound,
            ApplicationError::Repository(
                RepositoryError::NilAggregate | RepositoryError::Unexpected(_),
            ) => ErrorKind::Internal,
        }
    }
}
