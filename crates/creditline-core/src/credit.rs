//! Credit and refund request/result types.

use crate::ids::{OwnerId, ProjectId};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A request to credit or refund a project owner.
///
/// Nothing here is validated: empty identifiers, empty emails and zero or
/// negative amounts are carried through as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRequest {
    /// Contact address of the project owner.
    pub email: String,
    pub owner_id: OwnerId,
    pub project_id: ProjectId,
    /// Amount in US dollars, e.g. `10.5` or `100`.
    pub amount: f64,
}

impl CreditRequest {
    pub fn new(
        email: impl Into<String>,
        owner_id: impl Into<OwnerId>,
        project_id: impl Into<ProjectId>,
        amount: f64,
    ) -> Self {
        Self {
            email: email.into(),
            owner_id: owner_id.into(),
            project_id: project_id.into(),
            amount,
        }
    }

    /// Amount in integer cents, rounded half away from zero.
    pub fn amount_cents(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }
}

/// Outcome state of a credit issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditStatus {
    Success,
    Failed,
    Pending,
}

impl CreditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditStatus::Success => "success",
            CreditStatus::Failed => "failed",
            CreditStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "success" => Ok(CreditStatus::Success),
            "failed" => Ok(CreditStatus::Failed),
            "pending" => Ok(CreditStatus::Pending),
            other => Err(Error::Serialization(format!(
                "Unknown credit status: {}",
                other
            ))),
        }
    }
}

/// Result of a credit issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditResult {
    /// Provider-side invoice or transaction id.
    #[serde(
        default,
        alias = "stripe_invoice_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_id: Option<String>,
    pub status: CreditStatus,
}

impl CreditResult {
    pub fn success(reference_id: impl Into<String>) -> Self {
        Self {
            reference_id: Some(reference_id.into()),
            status: CreditStatus::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CreditStatus::Success
    }
}

/// Envelope a provider answers with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub data: Option<CreditResult>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ProviderResponse {
    pub fn ok(data: CreditResult) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: serde_json::Value) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    /// Resolve the envelope. A non-null error wins over any data.
    pub fn into_result(self) -> Result<CreditResult> {
        match (self.error, self.data) {
            (Some(error), _) => Err(Error::IssueFailed(error)),
            (None, Some(data)) => Ok(data),
            (None, None) => Err(Error::IssueFailed(serde_json::Value::Null)),
        }
    }
}
