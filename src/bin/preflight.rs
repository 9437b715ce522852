use shoe_store::infra::config::{Config, StoreBackend};
use shoe_store::storage;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads env vars (all optional):\n\
           BIND_ADDR, SHOE_STORE, MONGODB_URI, MONGODB_DATABASE, MONGODB_COLLECTION\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  SHOE_STORE={:?}", config.store_backend);
    if config.store_backend == StoreBackend::Mongo {
        println!("  MONGODB_URI={}", config.mongodb_uri);
        println!(
            "  Collection: {}.{}",
            config.mongodb_database, config.mongodb_collection
        );
    }

    let store = storage::open_store(&config).await?;
    store
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Store is not reachable: {}", e))?;
    println!("  Store is reachable.");

    let shoes = store
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Collection is not readable: {}", e))?;
    println!("  Collection holds {} shoe(s).", shoes.len());

    println!("> Preflight OK.");
    Ok(())
}
