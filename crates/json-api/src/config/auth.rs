//! Auth Config

use clap::Args;

/// Identity service settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Identity Toolkit web API key; the in-memory provider is used when unset
    #[arg(long, env = "IDENTITY_API_KEY", hide_env_values = true)]
    pub identity_api_key: Option<String>,

    /// Identity Toolkit API base URL
    #[arg(
        long,
        env = "IDENTITY_API_BASE",
        default_value = "https://identitytoolkit.googleapis.com"
    )]
    pub identity_api_base: String,

    /// Let anyone register with the admin role
    #[arg(long, env = "ALLOW_ADMIN_SIGNUP", default_value_t = false)]
    pub allow_admin_signup: bool,
}
