use clap::{Args, Subcommand};
use mesa_app::domain::tables::{
    StoreTablesService, TablesService,
    models::{NewTable, TableStatus},
};

use crate::cli::connection::StoreArgs;

#[derive(Debug, Args)]
pub(crate) struct TableCommand {
    #[command(subcommand)]
    command: TableSubcommand,
}

#[derive(Debug, Subcommand)]
enum TableSubcommand {
    /// Register a dining table
    Create(CreateTableArgs),
}

#[derive(Debug, Args)]
struct CreateTableArgs {
    #[arg(long)]
    number: u32,

    /// Register the table as occupied
    #[arg(long)]
    occupied: bool,

    #[command(flatten)]
    store: StoreArgs,
}

pub(crate) async fn run(command: TableCommand) -> Result<(), String> {
    match command.command {
        TableSubcommand::Create(args) => create(args).await,
    }
}

async fn create(args: CreateTableArgs) -> Result<(), String> {
    let service = StoreTablesService::new(args.store.connect());

    let status = if args.occupied {
        TableStatus::Occupied
    } else {
        TableStatus::Available
    };

    let table = service
        .create_table(NewTable {
            table_number: args.number,
            status,
        })
        .await
        .map_err(|error| format!("failed to create table: {error}"))?;

    println!("table_id: {}", table.id);
    println!("table_number: {}", table.table_number);

    Ok(())
}
