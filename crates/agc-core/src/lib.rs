//! Core types for the ATOMiK genome compiler.

pub mod error;
pub mod schema;

pub use error::{Error, Result};
pub use schema::{Dna, Meta, Mutation, Policy, Schema};
