//! Application layer - Use cases and orchestration
//!
//! Contains the transformer, the pipeline orchestration, and the port
//! definitions that infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
