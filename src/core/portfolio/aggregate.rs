// The Portfolio aggregate: identity, validated name and the queue of pending domain events.
//
// Boundaries
// - No input or output here. Persistence lives behind the PortfolioRepository port.
//
// Invariants
// - The trimmed name holds between NAME_MIN_LEN and NAME_MAX_LEN characters.
// - The id is assigned once and never reassigned.
// - Pending events are only drained by a repository after a successful commit.

use crate::core::portfolio::event::v1::portfolio_renamed::PortfolioRenamedV1;
use crate::core::portfolio::event::{DomainEvent, PortfolioEvent};
use std::fmt;
use thiserror::Error;

pub const NAME_MIN_LEN: usize = 5;
pub const NAME_MAX_LEN: usize = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("portfolio name must be between 5 and 30 characters long")]
    InvalidName,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PortfolioId(String);

impl PortfolioId {
    /// A fresh UUIDv4 identity.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PortfolioId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PortfolioId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim the candidate and check it against the length rule.
pub fn validate_name(name: &str) -> Result<&str, PortfolioError> {
    let trimmed = name.trim();
    let length = trimmed.chars().count();
    if length < NAME_MIN_LEN || length > NAME_MAX_LEN {
        return Err(PortfolioError::InvalidName);
    }
    Ok(trimmed)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    id: PortfolioId,
    name: String,
    pending_events: Vec<DomainEvent>,
}

impl Portfolio {
    /// Callers must have validated `name` already; see `decider::open::decide`.
    pub(crate) fn opened(id: PortfolioId, name: String, event: DomainEvent) -> Self {
        Self {
            id,
            name,
            pending_events: vec![event],
        }
    }

    /// Rebuild a persisted portfolio. Nothing is pending on a restored aggregate.
    pub fn restore(id: PortfolioId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            pending_events: Vec::new(),
        }
    }

    pub fn id(&self) -> &PortfolioId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pending_events(&self) -> &[DomainEvent] {
        &self.pending_events
    }

    pub fn clear_pending_events(&mut self) {
        self.pending_events.clear();
    }

    pub fn rename(&mut self, name: &str) -> Result<(), PortfolioError> {
        let name = validate_name(name)?;
        if name == self.name {
            return Ok(());
        }
        self.name = name.to_string();
        self.pending_events
            .push(DomainEvent::new(PortfolioEvent::PortfolioRenamedV1(
                PortfolioRenamedV1 {
                    portfolio_id: self.id.clone(),
                    name: self.name.clone(),
                },
            )));
        Ok(())
    }
}
