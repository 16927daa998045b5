// Row shapes of the `portfolios` and `event_journal` tables and their mapping from the domain.
//
// Column names and types are the storage contract shared with other readers of the journal.

use crate::core::portfolio::aggregate::{Portfolio, PortfolioId};
use crate::core::portfolio::event::DomainEvent;
use chrono::{DateTime, Utc};
use sqlx::types::Json;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PortfolioRow {
    pub id: String,
    pub name: String,
}

impl From<&Portfolio> for PortfolioRow {
    fn from(portfolio: &Portfolio) -> Self {
        Self {
            id: portfolio.id().to_string(),
            name: portfolio.name().to_string(),
        }
    }
}

impl From<PortfolioRow> for Portfolio {
    fn from(row: PortfolioRow) -> Self {
        Portfolio::restore(PortfolioId::from(row.id), row.name)
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct EventJournalRow {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub event_data: Json<serde_json::Value>,
}

impl TryFrom<&DomainEvent> for EventJournalRow {
    type Error = serde_json::Error;

    fn try_from(event: &DomainEvent) -> Result<Self, Self::Error> {
        Ok(Self {
            id: event.id().to_string(),
            timestamp: event.timestamp(),
            name: event.name().to_string(),
            event_data: Json(event.payload()?),
        })
    }
}
