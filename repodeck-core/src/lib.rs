//! Repodeck Core
//!
//! Core types for the repodeck GitHub repository tool.
//!
//! This crate contains:
//! - Domain types: repositories, owner scopes, credentials
//! - DTOs: the JSON shapes exchanged with the GitHub REST API
//! - Table: a fixed-column tabular view over listed repositories

pub mod domain;
pub mod dto;
pub mod table;
