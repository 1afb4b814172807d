//! Load the catalog from the configured product service and print it.
//!
//! ```text
//! storefront [--config PATH] [--sort] [--add ID]...
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use storefront::{
    logging, Config, FileSnapshotStore, HttpProductApi, InMemorySnapshotStore, Notifier,
    ProductId, SnapshotStore, Storefront,
};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Load the product catalog and print the list and cart")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sort the product list by price before printing
    #[arg(long)]
    sort: bool,

    /// Add a product to the cart by id (repeatable)
    #[arg(long = "add", value_name = "ID")]
    add: Vec<u64>,
}

async fn run<S: SnapshotStore>(config: &Config, args: &Args, snapshots: S) -> Result<(), String> {
    let api = HttpProductApi::new(config.api.base_url.clone());
    let notifier = Notifier::with_auto_close(config.notifications.auto_close());
    let mut shop = Storefront::new(api, snapshots).with_notifier(notifier);

    shop.load().await.map_err(|e| e.to_string())?;
    if args.sort {
        shop.sort_by_price();
    }
    for id in &args.add {
        shop.add_to_cart(ProductId(*id)).map_err(|e| e.to_string())?;
    }

    print!("{}", shop.product_list_view());
    println!();
    print!("{}", shop.cart_view());
    shop.tick(Instant::now());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    logging::init(&config.logging);

    let result = match &config.snapshot.dir {
        Some(dir) => match FileSnapshotStore::open(dir) {
            Ok(snapshots) => run(&config, &args, snapshots).await,
            Err(e) => Err(e.to_string()),
        },
        None => run(&config, &args, InMemorySnapshotStore::new()).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "storefront failed");
            ExitCode::FAILURE
        }
    }
}
