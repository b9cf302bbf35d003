//! Stripe client wrapper.

use async_trait::async_trait;
use creditline_core::{CreditProvider, CreditRequest, CreditResult, ProviderResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Invoice id returned by the mock client for every credit.
pub const FAKE_INVOICE_ID: &str = "stripe_fake_invoice_id_123_987";

const DEFAULT_API_KEY: &str = "sk_test_mock";
const DEFAULT_CURRENCY: &str = "usd";

/// Stripe client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripeConfig {
    pub api_key: String,
    pub currency: String,
}

impl StripeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Build from `STRIPE_API_KEY` and `STRIPE_CURRENCY`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Replace fields with `STRIPE_API_KEY` / `STRIPE_CURRENCY` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("STRIPE_API_KEY") {
            self.api_key = key;
        }
        if let Ok(currency) = std::env::var("STRIPE_CURRENCY") {
            self.currency = currency;
        }
        self
    }

    /// Whether the key is a Stripe test-mode key.
    pub fn is_test_mode(&self) -> bool {
        self.api_key.starts_with("sk_test_")
    }
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

/// Stripe client wrapper.
///
/// No request leaves the process: every credit is answered with the same
/// successful invoice.
#[derive(Debug, Clone, Default)]
pub struct StripeClient {
    config: StripeConfig,
}

impl StripeClient {
    /// Create a new Stripe client.
    pub fn new(config: StripeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }
}

#[async_trait]
impl CreditProvider for StripeClient {
    async fn issue(&self, request: &CreditRequest) -> ProviderResponse {
        debug!(
            amount_cents = request.amount_cents(),
            currency = %self.config.currency,
            test_mode = self.config.is_test_mode(),
            "Creating Stripe credit"
        );

        ProviderResponse::ok(CreditResult::success(FAKE_INVOICE_ID))
    }

    fn name(&self) -> &str {
        "stripe"
    }
}
