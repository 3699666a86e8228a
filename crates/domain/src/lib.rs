//! Domain layer for the weather pipeline
//!
//! Contains the weather records, forecast entries, derived analysis types,
//! value objects, and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
