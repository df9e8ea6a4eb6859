//! Core domain types
//!
//! These types are what the client hands to its callers once a response has
//! been decoded. They never carry raw JSON.

pub mod credential;
pub mod repository;
