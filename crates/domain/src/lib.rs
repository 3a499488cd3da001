//! Domain layer for Mailsmith
//!
//! Contains the core vocabulary of email drafting: tones, relationships,
//! lengths, draft requests, and generated variations. This layer has no
//! I/O dependencies and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
