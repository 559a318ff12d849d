//! Payment intents at the hosted payment gateway.

use async_trait::async_trait;
use futures::future::try_join_all;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::checkout::models::MAX_PAYERS;

/// Configuration for the payment gateway.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Gateway API base, e.g. `"https://api.stripe.com"`.
    pub api_base: String,

    /// Secret key sent as bearer token.
    pub secret_key: String,

    /// ISO currency code, lowercase.
    pub currency: String,
}

#[derive(Debug, Error)]
pub enum PaymentIntentsError {
    #[error("at least one amount is required")]
    NoAmounts,

    #[error("at most {max} amounts are allowed")]
    TooManyAmounts { max: usize },

    #[error("amount {index} must be greater than zero")]
    ZeroAmount { index: usize },

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway returned a non-2xx response or unexpected body.
    #[error("unexpected response from payment gateway: {0}")]
    UnexpectedResponse(String),
}

/// Creates one payment intent per payer amount.
#[automock]
#[async_trait]
pub trait PaymentIntentsService: Send + Sync {
    /// Returns the client secret of each created intent, in input order.
    async fn create_payment_intents(
        &self,
        amounts: &[u64],
    ) -> Result<Vec<String>, PaymentIntentsError>;
}

/// HTTP client for the gateway's payment intent API.
#[derive(Debug, Clone)]
pub struct StripeClient {
    config: StripeConfig,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

impl StripeClient {
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn create_intent(&self, amount: u64) -> Result<String, PaymentIntentsError> {
        let url = format!(
            "{}/v1/payment_intents",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", self.config.currency.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PaymentIntentsError::UnexpectedResponse(format!(
                "payment intent request failed with status {status}: {text}"
            )));
        }

        let parsed: PaymentIntentResponse = response.json().await?;

        Ok(parsed.client_secret)
    }
}

pub(crate) fn validate_amounts(amounts: &[u64]) -> Result<(), PaymentIntentsError> {
    if amounts.is_empty() {
        return Err(PaymentIntentsError::NoAmounts);
    }

    if amounts.len() > MAX_PAYERS {
        return Err(PaymentIntentsError::TooManyAmounts { max: MAX_PAYERS });
    }

    if let Some(index) = amounts.iter().position(|amount| *amount == 0) {
        return Err(PaymentIntentsError::ZeroAmount { index });
    }

    Ok(())
}

#[async_trait]
impl PaymentIntentsService for StripeClient {
    async fn create_payment_intents(
        &self,
        amounts: &[u64],
    ) -> Result<Vec<String>, PaymentIntentsError> {
        validate_amounts(amounts)?;

        let secrets = try_join_all(amounts.iter().map(|amount| self.create_intent(*amount))).await?;

        debug!(count = secrets.len(), "created payment intents");

        Ok(secrets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_amount_lists_are_rejected() {
        assert!(matches!(
            validate_amounts(&[]),
            Err(PaymentIntentsError::NoAmounts)
        ));
    }

    #[test]
    fn zero_amounts_are_rejected_by_position() {
        assert!(matches!(
            validate_amounts(&[500, 0]),
            Err(PaymentIntentsError::ZeroAmount { index: 1 })
        ));
        assert!(validate_amounts(&[1, 2]).is_ok());
    }

    #[test]
    fn one_intent_per_payer_at_most() {
        assert!(validate_amounts(&[100; MAX_PAYERS]).is_ok());
        assert!(matches!(
            validate_amounts(&[100; MAX_PAYERS + 1]),
            Err(PaymentIntentsError::TooManyAmounts { max: MAX_PAYERS })
        ));
    }

    #[tokio::test]
    async fn invalid_amounts_fail_before_any_request() {
        let client = StripeClient::new(StripeConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            secret_key: "sk_test".to_string(),
            currency: "usd".to_string(),
        });

        let result = client.create_payment_intents(&[]).await;

        assert!(matches!(result, Err(PaymentIntentsError::NoAmounts)));

        let result = client.create_payment_intents(&[100; 1_000]).await;

        assert!(matches!(
            result,
            Err(PaymentIntentsError::TooManyAmounts { .. })
        ));
    }
}
