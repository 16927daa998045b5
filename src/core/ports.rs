// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the portfolio persistence capability as a trait.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - The in memory adapter implements the same trait for tests and local development.

use crate::core::portfolio::aggregate::{Portfolio, PortfolioId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("portfolio cannot be nil")]
    NilAggregate,

    #[error("a portfolio with name '{0}' was already opened")]
    DuplicateName(String),

    #[error("portfolio not found")]
    NotFound,

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Persist the portfolio and journal its pending events atomically.
    /// On success the pending events are cleared from the aggregate; on failure it is left untouched.
    /// `None` stands for a missing aggregate and fails with `NilAggregate`.
    async fn save(&self, portfolio: Option<&mut Portfolio>) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: &PortfolioId) -> Result<Portfolio, RepositoryError>;

    async fn find_by_name(&self, name: &str) -> Result<Portfolio, RepositoryError>;
}
