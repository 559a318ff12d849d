use clap::{Args, Subcommand};
use mesa_app::auth::{AuthService, Password, Role, StoreAuthService};

use crate::cli::connection::{IdentityArgs, StoreArgs};

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Register an account, including admin accounts
    Register(RegisterUserArgs),
}

#[derive(Debug, Args)]
struct RegisterUserArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "MESA_USER_PASSWORD", hide_env_values = true)]
    password: String,

    /// `user` or `admin`
    #[arg(long, default_value = "user")]
    role: Role,

    #[command(flatten)]
    store: StoreArgs,

    #[command(flatten)]
    identity: IdentityArgs,
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::Register(args) => register(args).await,
    }
}

async fn register(args: RegisterUserArgs) -> Result<(), String> {
    let service = StoreAuthService::new(args.identity.connect(), args.store.connect());

    let session = service
        .register(&args.email, Password::new(args.password), args.role)
        .await
        .map_err(|error| format!("failed to register user: {error}"))?;

    println!("user_id: {}", session.principal.user_id);
    println!("email: {}", session.principal.email);
    println!("role: {}", session.principal.role);

    Ok(())
}
