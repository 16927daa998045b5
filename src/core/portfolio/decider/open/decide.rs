// Validated factory for opening a portfolio.
//
// Responsibilities
// - Enforce the name rule before any aggregate exists.
// - Assign a fresh identity and enqueue exactly one PortfolioOpenedV1 event.
// - Never perform input or output.

use crate::core::portfolio::aggregate::{Portfolio, PortfolioError, PortfolioId, validate_name};
use crate::core::portfolio::event::v1::portfolio_opened::PortfolioOpenedV1;
use crate::core::portfolio::event::{DomainEvent, PortfolioEvent};

pub fn open_portfolio(name: &str) -> Result<Portfolio, PortfolioError> {
    let name = validate_name(name)?;
    let id = PortfolioId::generate();
    let event = DomainEvent::new(PortfolioEvent::PortfolioOpenedV1(PortfolioOpenedV1 {
        portfolio_id: id.clone(),
    }));
    Ok(Portfolio::opened(id, name.to_string(), event))
}

#[cfg(test)]
mod open_portfolio_decide_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_open_a_portfolio_with_a_trimmed_name() {
        let portfolio = open_portfolio("  A portfolio name  ").unwrap();
        assert_eq!(portfolio.name(), "A portfolio name");
        assert_eq!(portfolio.pending_events().len(), 1);
    }

    #[rstest]
    fn it_should_refuse_a_name_that_is_too_short() {
        assert_eq!(open_portfolio("abcd"), Err(PortfolioError::InvalidName));
    }

    #[rstest]
    #[case("abcde")]
    #[case("Growth")]
    #[case("   Dividends and chill   ")]
    #[case("exactly-thirty-characters-long")]
    fn it_should_enqueue_one_opened_event_for_the_new_id(#[case] name: &str) {
        let portfolio = open_portfolio(name).unwrap();
        let events = portfolio.pending_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "portfolio-opened");
        assert_eq!(
            events[0].kind(),
            &PortfolioEvent::PortfolioOpenedV1(PortfolioOpenedV1 {
                portfolio_id: portfolio.id().clone(),
            })
        );
        assert_eq!(
            events[0].payload().unwrap(),
            serde_json::json!({ "portfolioId": portfolio.id().as_str() })
        );
    }

    #[rstest]
    #[case("")]
    #[case("abcd")]
    #[case("      abc      ")]
    #[case("a name that is far too long to be accepted")]
    fn it_should_refuse_names_outside_the_bounds(#[case] name: &str) {
        let result = open_portfolio(name);
        assert_eq!(result, Err(PortfolioError::InvalidName));
        assert_eq!(
            result.unwrap_err().to_string(),
            "portfolio name must be between 5 and 30 characters long"
        );
    }

    #[rstest]
    fn it_should_assign_a_fresh_id_on_every_call() {
        let first = open_portfolio("Same name twice").unwrap();
        let second = open_portfolio("Same name twice").unwrap();
        assert_ne!(first.id(), second.id());
        assert_ne!(
            first.pending_events()[0].id(),
            second.pending_events()[0].id()
        );
    }
}
