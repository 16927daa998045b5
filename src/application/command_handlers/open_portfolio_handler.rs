// Open-portfolio command handler orchestrates the write flow.
//
// Responsibilities
// - Run the validated factory on the command's name.
// - Save the new aggregate, which journals its PortfolioOpened event in the same transaction.
// - Return the new identity. Errors are surfaced as they are; nothing is retried.

use crate::application::errors::ApplicationError;
use crate::core::portfolio::aggregate::PortfolioId;
use crate::core::portfolio::decider::open::command::OpenPortfolioCommand;
use crate::core::portfolio::decider::open::decide::open_portfolio;
use crate::core::ports::PortfolioRepository;
use std::sync::Arc;

pub struct OpenPortfolioHandler<TRepository>
where
    TRepository: PortfolioRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> OpenPortfolioHandler<TRepository>
where
    TRepository: PortfolioRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip_all, fields(name = %command.name))]
    pub async fn handle(
        &self,
        command: OpenPortfolioCommand,
    ) -> Result<PortfolioId, ApplicationError> {
        let mut portfolio = open_portfolio(&command.name)?;
        self.repository.save(Some(&mut portfolio)).await?;
        tracing::info!(portfolio_id = %portfolio.id(), "portfolio opened");
        Ok(portfolio.id().clone())
    }
}

#[cfg(test)]
mod open_portfolio_handler_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_portfolio_repository::{
        InMemoryPortfolioRepository, NameUniqueness,
    };
    use crate::application::errors::ErrorKind;
    use crate::core::portfolio::aggregate::PortfolioError;
    use crate::core::ports::RepositoryError;
    use crate::test_support::fixtures::portfolios::unique_portfolio_name;
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> OpenPortfolioCommand {
        OpenPortfolioCommand {
            name: unique_portfolio_name("portfolio"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn handle_open_saves_and_journals(command: OpenPortfolioCommand) {
        let repository = Arc::new(InMemoryPortfolioRepository::new());
        let handler = OpenPortfolioHandler::new(repository.clone());

        let portfolio_id = handler
            .handle(command.clone())
            .await
            .expect("handle failed");

        let saved = repository.find_by_id(&portfolio_id).await.unwrap();
        assert_eq!(saved.name(), command.name);
        let outbox = repository.outbox().await;
        assert_eq!(outbox.len(), 1);
        assert_eq!(
            outbox[0].payload().unwrap(),
            serde_json::json!({ "portfolioId": portfolio_id.as_str() })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_open_fails_on_an_invalid_name() {
        let repository = Arc::new(InMemoryPortfolioRepository::new());
        let handler = OpenPortfolioHandler::new(repository.clone());

        let result = handler
            .handle(OpenPortfolioCommand {
                name: "abcd".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(PortfolioError::InvalidName))
        ));
        assert!(repository.outbox().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn handle_open_fails_on_a_duplicate_name(command: OpenPortfolioCommand) {
        let repository = Arc::new(InMemoryPortfolioRepository::with_name_uniqueness(
            NameUniqueness::Enforced,
        ));
        let handler = OpenPortfolioHandler::new(repository.clone());
        handler
            .handle(command.clone())
            .await
            .expect("first handle failed");

        let err = handler.handle(command.clone()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        match err {
            ApplicationError::Repository(RepositoryError::DuplicateName(name)) => {
                assert_eq!(name, command.name)
            }
            e => panic!("unexpected error: {e:?}"),
        }
        assert_eq!(repository.outbox().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_open_fails_if_the_repository_is_offline(command: OpenPortfolioCommand) {
        let mut repository = InMemoryPortfolioRepository::new();
        repository.toggle_offline();
        let handler = OpenPortfolioHandler::new(Arc::new(repository));

        let err = handler.handle(command).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.to_string(), "Portfolio repository offline");
    }
}
