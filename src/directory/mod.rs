//! Company directory data source module.
//!
//! Provides the company record model and the one-shot loader for the static list.

pub mod client;
pub mod models;

pub use client::{DirectoryClient, LoadOutcome};
pub use models::Company;
