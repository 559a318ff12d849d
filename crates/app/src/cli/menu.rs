use clap::{Args, Subcommand};
use mesa_app::{
    domain::menu::{
        MenuService, StoreMenuService,
        models::{Category, NewProduct},
    },
    money::format_minor,
};

use crate::cli::connection::StoreArgs;

#[derive(Debug, Args)]
pub(crate) struct MenuCommand {
    #[command(subcommand)]
    command: MenuSubcommand,
}

#[derive(Debug, Subcommand)]
enum MenuSubcommand {
    /// Add a product to the menu
    Create(CreateProductArgs),

    /// Print the menu
    List(ListProductsArgs),
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Price in cents
    #[arg(long)]
    price: u64,

    /// Menu section, e.g. "Entradas" or "drinks"
    #[arg(long)]
    category: Category,

    /// List the product as sold out
    #[arg(long)]
    unavailable: bool,

    #[command(flatten)]
    store: StoreArgs,
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Only list one menu section
    #[arg(long)]
    category: Option<Category>,

    #[command(flatten)]
    store: StoreArgs,
}

pub(crate) async fn run(command: MenuCommand) -> Result<(), String> {
    match command.command {
        MenuSubcommand::Create(args) => create(args).await,
        MenuSubcommand::List(args) => list(args).await,
    }
}

async fn create(args: CreateProductArgs) -> Result<(), String> {
    let service = StoreMenuService::new(args.store.connect());

    let product = service
        .create_product(NewProduct {
            name: args.name,
            description: args.description,
            price: args.price,
            category: args.category,
            available: !args.unavailable,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_id: {}", product.id);
    println!("name: {}", product.name);
    println!("price: {}", format_minor(product.price));

    Ok(())
}

async fn list(args: ListProductsArgs) -> Result<(), String> {
    let service = StoreMenuService::new(args.store.connect());

    let products = service
        .list_products(args.category)
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    for product in products {
        println!(
            "{}\t{}\t{}\t{}{}",
            product.id,
            product.category,
            product.name,
            format_minor(product.price),
            if product.available { "" } else { "\t(sold out)" }
        );
    }

    Ok(())
}
