//! Testing utilities
//!
//! A scripted [`MockTransport`] lets callers exercise `GithubClient`
//! without a network.

mod mock;

pub use mock::MockTransport;
