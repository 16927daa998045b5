use portfolios::adapters::sqlite::sqlite_portfolio_repository::SqlitePortfolioRepository;
use portfolios::application::command_handlers::open_portfolio_handler::OpenPortfolioHandler;
use portfolios::core::portfolio::decider::open::command::OpenPortfolioCommand;
use portfolios::shell::config::Config;
use portfolios::shell::db::connect;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let pool = connect(&config).await?;
    let handler = OpenPortfolioHandler::new(Arc::new(SqlitePortfolioRepository::new(pool)));

    // Every argument is a portfolio name to open.
    let mut failures = 0;
    for name in std::env::args().skip(1) {
        let trimmed = name.trim().to_string();
        match handler.handle(OpenPortfolioCommand { name }).await {
            Ok(portfolio_id) => println!("{portfolio_id}\t{trimmed}"),
            Err(err) => {
                failures += 1;
                tracing::error!(
                    kind = ?err.kind(),
                    error = %err,
                    name = %trimmed,
                    "could not open portfolio"
                );
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} portfolio(s) could not be opened");
    }
    Ok(())
}
