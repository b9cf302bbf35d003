//! Command handlers.

use crate::config::{CliConfig, OutputFormat};
use console::style;
use creditline_core::{CreditProvider, CreditResult, CreditStatus, Error};
use creditline_stripe::{CreditIssuer, StripeClient};
use std::path::Path;
use tracing::debug;

const ISSUE_FAILED: &str = "credit issue failed";

/// Issue a credit or refund and print the result.
pub async fn issue(
    config: &CliConfig,
    email: &str,
    owner_id: &str,
    project_id: &str,
    amount: f64,
    format: Option<OutputFormat>,
) -> Result<(), Box<dyn std::error::Error>> {
    let issuer = CreditIssuer::new(StripeClient::new(config.stripe_config()));
    let format = format.unwrap_or(config.output_format);
    debug!(?format, currency = %issuer.provider().config().currency, "Issuing credit");

    let rendered = issue_with(&issuer, email, owner_id, project_id, amount, format).await?;
    println!("{}", rendered);
    Ok(())
}

/// Issue through `issuer` and render the result.
///
/// On provider failure the raw payload goes to stderr and the returned error
/// stays short so it is not printed twice.
pub async fn issue_with<P: CreditProvider>(
    issuer: &CreditIssuer<P>,
    email: &str,
    owner_id: &str,
    project_id: &str,
    amount: f64,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match issuer
        .issue_credits_or_refund(email, owner_id, project_id, amount)
        .await
    {
        Ok(result) => render_result(&result, format),
        Err(Error::IssueFailed(payload)) => {
            eprintln!("{} Credit issue failed", style("✗").red());
            eprintln!("{}", serde_json::to_string_pretty(&payload)?);
            Err(ISSUE_FAILED.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Render a credit result in the requested format.
pub fn render_result(
    result: &CreditResult,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Yaml => serde_yaml::to_string(result)?.trim_end().to_string(),
        OutputFormat::Table => {
            let status = match result.status {
                CreditStatus::Success => style(result.status.as_str()).green(),
                CreditStatus::Failed => style(result.status.as_str()).red(),
                CreditStatus::Pending => style(result.status.as_str()).yellow(),
            };
            format!(
                "{:<14} {}\n{:<14} {}",
                "STATUS",
                status,
                "REFERENCE ID",
                result.reference_id.as_deref().unwrap_or("-")
            )
        }
    };
    Ok(rendered)
}

/// Show current configuration.
pub fn show_config(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let stripe = config.stripe_config();

    println!("Current configuration:");
    println!(
        "  stripe_api_key: {}",
        if config.stripe_api_key.is_some() {
            "***"
        } else {
            "(not set)"
        }
    );
    println!("  currency: {}", stripe.currency);
    println!("  test_mode: {}", stripe.is_test_mode());
    println!("  output_format: {:?}", config.output_format);

    if let Ok(path) = CliConfig::config_path() {
        println!("\nConfig file: {}", path.display());
    }

    Ok(())
}

/// Set configuration.
pub fn set_config(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    set_config_at(&CliConfig::config_path()?, key, value)?;

    println!("{} Set {} = {}", style("✓").green(), key, value);
    Ok(())
}

/// Update one key in the config file at `path`. A file that fails to parse is
/// left untouched.
pub fn set_config_at(path: &Path, key: &str, value: &str) -> creditline_core::Result<()> {
    let mut config = CliConfig::load_from(path)?;
    config.set(key, value)?;
    config.save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use creditline_core::{CreditRequest, ProviderResponse};
    use serial_test::serial;

    struct DecliningProvider;

    #[async_trait]
    impl CreditProvider for DecliningProvider {
        async fn issue(&self, _request: &CreditRequest) -> ProviderResponse {
            ProviderResponse::err(serde_json::json!({"code": "card_declined"}))
        }

        fn name(&self) -> &str {
            "declining"
        }
    }

    #[test]
    fn test_render_json() {
        let result = CreditResult::success("stripe_fake_invoice_id_123_987");
        let rendered = render_result(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["reference_id"], "stripe_fake_invoice_id_123_987");
    }

    #[test]
    fn test_render_yaml() {
        let result = CreditResult::success("in_1");
        let rendered = render_result(&result, OutputFormat::Yaml).unwrap();
        assert_eq!(rendered, "reference_id: in_1\nstatus: success");
    }

    #[test]
    fn test_render_table_without_reference() {
        let result = CreditResult {
            reference_id: None,
            status: CreditStatus::Pending,
        };
        let rendered = render_result(&result, OutputFormat::Table).unwrap();
        let plain = console::strip_ansi_codes(&rendered);

        assert!(plain.contains("pending"));
        assert!(plain.lines().last().unwrap().ends_with('-'));
    }

    #[tokio::test]
    #[serial]
    async fn test_issue_with_default_config() {
        let config = CliConfig::default();
        issue(
            &config,
            "owner@example.com",
            "owner_1",
            "proj_1",
            10.5,
            Some(OutputFormat::Json),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_issue_failure_returns_short_error() {
        let issuer = CreditIssuer::new(DecliningProvider);
        let err = issue_with(&issuer, "a@b.com", "o2", "p2", 1.0, OutputFormat::Json)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), ISSUE_FAILED);
        assert!(!format!("{:?}", err).contains("card_declined"));
    }

    #[tokio::test]
    async fn test_issue_with_renders_result() {
        let issuer = CreditIssuer::default();
        let rendered = issue_with(&issuer, "", "", "", 0.0, OutputFormat::Yaml)
            .await
            .unwrap();
        assert!(rendered.contains("status: success"));
    }

    #[test]
    fn test_set_config_keeps_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let original = "stripe_api_key: sk_live_secret\ncurrency: eur\noutput_format: xml\n";
        std::fs::write(&path, original).unwrap();

        let err = set_config_at(&path, "currency", "gbp").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_set_config_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "stripe_api_key: sk_live_secret\ncurrency: eur\n").unwrap();

        set_config_at(&path, "currency", "gbp").unwrap();

        let config = CliConfig::load_from(&path).unwrap();
        assert_eq!(config.stripe_api_key.as_deref(), Some("sk_live_secret"));
        assert_eq!(config.currency.as_deref(), Some("gbp"));
    }
}
