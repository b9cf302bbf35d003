//! Stripe credit integration for Creditline.
//!
//! Provides the Stripe client used as the default credit provider and the
//! issuer that turns provider envelopes into results.

pub mod issuer;
pub mod stripe;

pub use issuer::{CreditIssuer, issue_credits_or_refund};
pub use stripe::{FAKE_INVOICE_ID, StripeClient, StripeConfig};
