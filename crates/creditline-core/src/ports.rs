//! Port traits (hexagonal architecture).
//!
//! These traits define the interfaces between the core domain and payment
//! provider adapters.

use crate::credit::{CreditRequest, ProviderResponse};
use async_trait::async_trait;

/// Payment provider able to issue credits or refunds.
#[async_trait]
pub trait CreditProvider: Send + Sync {
    /// Issue a credit. Failures are reported inside the envelope, not as `Err`.
    async fn issue(&self, request: &CreditRequest) -> ProviderResponse;

    /// Provider name for logging.
    fn name(&self) -> &str;
}
