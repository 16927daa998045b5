// Shared test fixtures for portfolios.
// Used by the integration tests through `tests/fixtures/mod.rs`, and compiled into the crate
// during unit tests via include! in src/lib.rs (cfg(test)).

/// `prefix` followed by a random eight character suffix, so repeated runs never collide on name.
pub fn unique_portfolio_name(prefix: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &suffix[..8])
}
