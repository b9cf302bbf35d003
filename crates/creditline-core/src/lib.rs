//! Creditline Core
//!
//! Domain types, the provider port and error handling for Creditline.
//! This crate has minimal dependencies and defines the shared vocabulary
//! used by the provider and CLI crates.

pub mod credit;
pub mod error;
pub mod ids;
pub mod ports;

pub use credit::{CreditRequest, CreditResult, CreditStatus, ProviderResponse};
pub use error::{Error, Result};
pub use ids::*;
pub use ports::CreditProvider;
