//! Data Transfer Objects for the GitHub REST API
//!
//! Responses are always decoded as JSON objects into these types at the
//! boundary; nothing past the client looks at untyped JSON.

pub mod repository;
