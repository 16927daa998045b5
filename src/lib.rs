// Module tree of the portfolios crate.
//
// Layout
// - core: the portfolio aggregate, its events and the repository port.
// - application: command handlers and the error classification transports map from.
// - adapters: in-memory and SQLite repositories plus their row mappers.
// - shell: configuration and database bootstrap used by the binary.

pub mod core {
    pub mod portfolio;
    pub mod ports;
}

pub mod application {
    pub mod errors;
    pub mod command_handlers {
        pub mod open_portfolio_handler;
    }
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_portfolio_repository;
    }
    pub mod mappers {
        pub mod portfolio_row;
    }
    pub mod sqlite {
        pub mod sqlite_portfolio_repository;
    }
}

pub mod shell {
    pub mod config;
    pub mod db;
}

#[cfg(test)]
pub mod test_support {
    pub mod fixtures {
        pub mod portfolios {
            include!("../tests/fixtures/portfolios.rs");
        }
    }
}
