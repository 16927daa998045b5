// Command data type for opening a portfolio.
//
// Purpose
// - Express user intent to open a portfolio under a name.
//
// Responsibilities
// - Carry input for the factory to validate. Transport layers bind their request bodies into it.

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct OpenPortfolioCommand {
    pub name: String,
}

#[cfg(test)]
mod open_portfolio_command_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_bind_from_a_request_body() {
        let command: OpenPortfolioCommand =
            serde_json::from_str(r#"{ "name": "A portfolio name" }"#).unwrap();
        assert_eq!(command.name, "A portfolio name");
    }

    #[rstest]
    fn it_should_refuse_a_body_without_a_name() {
        let result = serde_json::from_str::<OpenPortfolioCommand>("{}");
        assert!(result.is_err());
    }
}
