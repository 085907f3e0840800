// Composition root for the calendar service.
//
// Responsibilities
// - Read config from the environment.
// - Wire the in-memory store, repository and use case into the shared state.
// - Expose the REST router and the GraphQL schema over that state.

pub mod config;
pub mod graphql;
pub mod http;
pub mod shutdown;
pub mod state;
