// In memory implementation of the PortfolioRepository port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store portfolios by id with a secondary index by name.
// - Retain every saved domain event in an outbox list for inspection. The outbox is never drained.
// - Enforce name uniqueness only when constructed with NameUniqueness::Enforced.

use crate::core::portfolio::aggregate::{Portfolio, PortfolioId};
use crate::core::portfolio::event::DomainEvent;
use crate::core::ports::{PortfolioRepository, RepositoryError};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameUniqueness {
    /// Last save wins the name index. Matches the historical behaviour of this adapter.
    #[default]
    Unchecked,
    /// A name held by a different id is rejected with DuplicateName, like the SQLite adapter.
    Enforced,
}

#[derive(Default)]
struct State {
    entities: HashMap<PortfolioId, Portfolio>,
    name_index: HashMap<String, PortfolioId>,
    outbox: Vec<DomainEvent>,
}

#[derive(Default)]
pub struct InMemoryPortfolioRepository {
    state: RwLock<State>,
    name_uniqueness: NameUniqueness,
    is_offline: bool,
}

impl InMemoryPortfolioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_uniqueness(name_uniqueness: NameUniqueness) -> Self {
        Self {
            name_uniqueness,
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn outbox(&self) -> Vec<DomainEvent> {
        self.state.read().await.outbox.clone()
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Portfolio repository offline").into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn save(&self, portfolio: Option<&mut Portfolio>) -> Result<(), RepositoryError> {
        let portfolio = portfolio.ok_or(RepositoryError::NilAggregate)?;
        self.ensure_online()?;

        let mut state = self.state.write().await;
        let id = portfolio.id().clone();
        let name = portfolio.name().to_string();

        if self.name_uniqueness == NameUniqueness::Enforced
            && matches!(state.name_index.get(&name), Some(owner) if *owner != id)
        {
            tracing::debug!(
                portfolio_id = %id,
                name = %name,
                "name already held by another portfolio"
            );
            return Err(RepositoryError::DuplicateName(name));
        }

        let previous_name = state.entities.get(&id).map(|p| p.name().to_string());
        if let Some(previous_name) = previous_name.filter(|previous| *previous != name) {
            if state.name_index.get(&previous_name) == Some(&id) {
                state.name_index.remove(&previous_name);
            }
        }

        state.outbox.extend_from_slice(portfolio.pending_events());
        portfolio.clear_pending_events();
        state.entities.insert(id.clone(), portfolio.clone());
        state.name_index.insert(name, id);
        Ok(())
    }

    async fn find_by_id(&self, id: &PortfolioId) -> Result<Portfolio, RepositoryError> {
        self.ensure_online()?;
        self.state
            .read()
            .await
            .entities
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Portfolio, RepositoryError> {
        self.ensure_online()?;
        let state = self.state.read().await;
        state
            .name_index
            .get(name)
            .and_then(|id| state.entities.get(id))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}
