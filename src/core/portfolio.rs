// This module groups the portfolio domain components.
//
// Structure
// - aggregate.rs: the Portfolio aggregate, its identity and name rule
// - event.rs + event/: the domain event envelope and versioned payloads
// - decider/: validated factories per command intent

pub mod aggregate;
pub mod event;
pub mod decider {
    pub mod open {
        pub mod command;
        pub mod decide;
    }
}
