//! Carts Config

use std::path::PathBuf;

use clap::Args;

/// Cart persistence settings.
#[derive(Debug, Args)]
pub struct CartsConfig {
    /// Directory holding one saved cart per user
    #[arg(long, env = "CARTS_DIR", default_value = "carts")]
    pub carts_dir: PathBuf,
}
