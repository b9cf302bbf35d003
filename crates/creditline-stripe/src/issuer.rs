//! Credit and refund issuing.

use crate::stripe::StripeClient;
use creditline_core::{CreditProvider, CreditRequest, CreditResult, Result};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// Issues credits through a payment provider.
pub struct CreditIssuer<P> {
    provider: P,
}

impl<P: CreditProvider> CreditIssuer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Issue a credit for a prepared request.
    ///
    /// Fails with [`creditline_core::Error::IssueFailed`] carrying the raw
    /// provider payload when the provider reports an error.
    pub async fn issue(&self, request: &CreditRequest) -> Result<CreditResult> {
        let span = info_span!(
            "credit.issue",
            request_id = %Uuid::now_v7(),
            provider = self.provider.name(),
            owner = %request.owner_id,
            project = %request.project_id,
            amount = request.amount,
        );

        async {
            let result = self.provider.issue(request).await.into_result();
            match &result {
                Ok(credit) => info!(
                    status = %credit.status,
                    reference_id = credit.reference_id.as_deref().unwrap_or_default(),
                    "Credit issued"
                ),
                Err(e) => warn!(error = %e, "Credit issue failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Issue a credit or refund to a project owner. `amount` is in US dollars.
    pub async fn issue_credits_or_refund(
        &self,
        email: &str,
        owner_id: &str,
        project_id: &str,
        amount: f64,
    ) -> Result<CreditResult> {
        let request = CreditRequest::new(email, owner_id, project_id, amount);
        self.issue(&request).await
    }
}

impl Default for CreditIssuer<StripeClient> {
    fn default() -> Self {
        Self::new(StripeClient::default())
    }
}

/// Issue a credit or refund through the default Stripe client.
pub async fn issue_credits_or_refund(
    email: &str,
    owner_id: &str,
    project_id: &str,
    amount: f64,
) -> Result<CreditResult> {
    CreditIssuer::default()
        .issue_credits_or_refund(email, owner_id, project_id, amount)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stripe::FAKE_INVOICE_ID;
    use async_trait::async_trait;
    use creditline_core::{CreditStatus, Error, ProviderResponse};

    struct FailingProvider;

    #[async_trait]
    impl CreditProvider for FailingProvider {
        async fn issue(&self, _request: &CreditRequest) -> ProviderResponse {
            ProviderResponse::err(serde_json::json!({"type": "api_error"}))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_default_issuer_succeeds() {
        let result = issue_credits_or_refund("owner@example.com", "owner_1", "proj_1", 10.5)
            .await
            .unwrap();
        assert_eq!(result.status, CreditStatus::Success);
        assert_eq!(result.reference_id.as_deref(), Some(FAKE_INVOICE_ID));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let issuer = CreditIssuer::new(FailingProvider);
        let err = issuer
            .issue_credits_or_refund("owner@example.com", "owner_1", "proj_1", 10.5)
            .await
            .unwrap_err();

        match err {
            Error::IssueFailed(payload) => assert_eq!(payload["type"], "api_error"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
