// SQLite implementation of the PortfolioRepository port.
//
// Responsibilities
// - Upsert the portfolio row and append its pending events to `event_journal` in one transaction.
// - Translate a unique violation raised while writing the portfolio row into DuplicateName.
// - Clear the aggregate's pending events only once the transaction has committed.
//
// Concurrency
// - No application level locking. Every save opens its transaction with BEGIN IMMEDIATE, so it
//   holds the database write lock from its first statement and concurrent saves queue on the
//   connection's busy timeout (see `shell::db::connect`).
// - The unique index on `name` decides races: of two saves under the same name one commits and
//   the other rolls back with DuplicateName.
// - Nothing is retried here.

use crate::adapters::mappers::portfolio_row::{EventJournalRow, PortfolioRow};
use crate::core::portfolio::aggregate::{Portfolio, PortfolioId};
use crate::core::ports::{PortfolioRepository, RepositoryError};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Unexpected(err.into())
    }
}

/// A unique violation from a statement writing `portfolios` can only come from `idx_name`:
/// the row's id was looked up inside the same write transaction, so no other save can have
/// inserted it since.
fn map_portfolio_write_error(err: sqlx::Error, name: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepositoryError::DuplicateName(name.to_string());
        }
    }
    err.into()
}

pub struct SqlitePortfolioRepository {
    pool: SqlitePool,
}

impl SqlitePortfolioRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioRepository for SqlitePortfolioRepository {
    #[tracing::instrument(skip_all)]
    async fn save(&self, portfolio: Option<&mut Portfolio>) -> Result<(), RepositoryError> {
        let portfolio = portfolio.ok_or(RepositoryError::NilAggregate)?;
        let row = PortfolioRow::from(&*portfolio);
        let journal = portfolio
            .pending_events()
            .iter()
            .map(EventJournalRow::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(anyhow::Error::from)?;

        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let existing = sqlx::query_scalar::<_, String>("SELECT id FROM portfolios WHERE id = ?")
            .bind(&row.id)
            .fetch_optional(&mut *tx)
            .await?;

        let inserted = existing.is_none();
        let written = if inserted {
            sqlx::query("INSERT INTO portfolios (id, name) VALUES (?, ?)")
                .bind(&row.id)
                .bind(&row.name)
                .execute(&mut *tx)
                .await
        } else {
            sqlx::query("UPDATE portfolios SET name = ? WHERE id = ?")
                .bind(&row.name)
                .bind(&row.id)
                .execute(&mut *tx)
                .await
        };

        if let Err(err) = written {
            let err = map_portfolio_write_error(err, &row.name);
            if let RepositoryError::DuplicateName(name) = &err {
                tracing::warn!(
                    portfolio_id = %row.id,
                    name = %name,
                    "portfolio name already in use"
                );
            }
            // Dropping the transaction rolls it back.
            drop(tx);
            return Err(err);
        }

        for event in &journal {
            sqlx::query(
                "INSERT INTO event_journal (id, timestamp, name, event_data) VALUES (?, ?, ?, ?)",
            )
            .bind(&event.id)
            .bind(event.timestamp)
            .bind(&event.name)
            .bind(&event.event_data)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        portfolio.clear_pending_events();

        tracing::debug!(
            portfolio_id = %row.id,
            journaled = journal.len(),
            inserted,
            "portfolio saved"
        );
        Ok(())
    }

    #[tracing::instrument(skip(self, id), fields(portfolio_id = %id))]
    async fn find_by_id(&self, id: &PortfolioId) -> Result<Portfolio, RepositoryError> {
        sqlx::query_as::<_, PortfolioRow>("SELECT id, name FROM portfolios WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .map(Portfolio::from)
            .ok_or(RepositoryError::NotFound)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Portfolio, RepositoryError> {
        sqlx::query_as::<_, PortfolioRow>("SELECT id, name FROM portfolios WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .map(Portfolio::from)
            .ok_or(RepositoryError::NotFound)
    }
}
