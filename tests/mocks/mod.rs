//! Test doubles shared by integration tests.

mod mock_apollo_client;

pub use mock_apollo_client::MockApolloClient;
