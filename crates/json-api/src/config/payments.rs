//! Payments Config

use clap::Args;

use mesa_app::domain::payments::StripeConfig;

/// Payment gateway settings.
#[derive(Debug, Args)]
pub struct PaymentsConfig {
    /// Gateway secret key; payment intents are disabled when unset
    #[arg(long, env = "STRIPE_SECRET_KEY", hide_env_values = true)]
    pub stripe_secret_key: Option<String>,

    /// Gateway API base URL
    #[arg(long, env = "STRIPE_API_BASE", default_value = "https://api.stripe.com")]
    pub stripe_api_base: String,

    /// Currency of created payment intents
    #[arg(long, env = "PAYMENT_CURRENCY", default_value = "usd")]
    pub currency: String,
}

impl PaymentsConfig {
    /// Gateway settings, when a key is configured.
    #[must_use]
    pub fn stripe_config(&self) -> Option<StripeConfig> {
        self.stripe_secret_key.as_ref().map(|secret_key| StripeConfig {
            api_base: self.stripe_api_base.clone(),
            secret_key: secret_key.clone(),
            currency: self.currency.to_lowercase(),
        })
    }
}
