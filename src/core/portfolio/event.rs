// Domain event envelope for the portfolio aggregate and its versioned payloads.
//
// Purpose
// - Give every fact an identity and a UTC timestamp, and keep the payload as a tagged enum.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - The `name` of a variant is journaled and must never change.

pub mod v1 {
    pub mod portfolio_opened;
    pub mod portfolio_renamed;
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum PortfolioEvent {
    PortfolioOpenedV1(v1::portfolio_opened::PortfolioOpenedV1),
    PortfolioRenamedV1(v1::portfolio_renamed::PortfolioRenamedV1),
}

impl PortfolioEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PortfolioEvent::PortfolioOpenedV1(_) => "portfolio-opened",
            PortfolioEvent::PortfolioRenamedV1(_) => "portfolio-renamed",
        }
    }

    /// The untagged payload mapping, as stored in the journal's `event_data` column.
    pub fn payload(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            PortfolioEvent::PortfolioOpenedV1(details) => serde_json::to_value(details),
            PortfolioEvent::PortfolioRenamedV1(details) => serde_json::to_value(details),
        }
    }
}

/// An immutable fact that happened to a portfolio.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct DomainEvent {
    id: Uuid,
    timestamp: DateTime<Utc>,
    kind: PortfolioEvent,
}

impl DomainEvent {
    pub fn new(kind: PortfolioEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> &PortfolioEvent {
        &self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn payload(&self) -> serde_json::Result<serde_json::Value> {
        self.kind.payload()
    }
}
