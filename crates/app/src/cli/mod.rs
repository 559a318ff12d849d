use clap::{Parser, Subcommand};

mod connection;
mod menu;
mod table;
mod user;

#[derive(Debug, Parser)]
#[command(name = "mesa-app", about = "Mesa admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Menu(menu::MenuCommand),
    Table(table::TableCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Menu(command) => menu::run(command).await,
            Commands::Table(command) => table::run(command).await,
        }
    }
}
