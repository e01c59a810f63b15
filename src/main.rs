use clap::Parser;
use rocket_cart::core::ConfigProvider;
use rocket_cart::utils::{logger, validation::Validate};
use rocket_cart::{
    Cart, CartStore, CliConfig, Command, ConsoleNotifier, HttpCatalog, LocalStorage, Outcome,
    UpdateProductAmount,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_with_level(config.log_level.as_deref());
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = HttpCatalog::from_config(&config)?;
    let storage = LocalStorage::new(config.storage_dir());
    let store =
        CartStore::load_with_key(catalog, storage, ConsoleNotifier, config.cart_key()).await?;

    let result = match cli.command {
        Command::Show => Ok(Outcome::Unchanged),
        Command::Add { product_id } => store.add_product(product_id).await,
        Command::Remove { product_id } => store.remove_product(product_id).await,
        Command::Update { product_id, amount } => {
            store
                .update_product_amount(UpdateProductAmount { product_id, amount })
                .await
        }
    };

    print_cart(&store.cart());

    // The notifier has already told the user what went wrong.
    if let Err(e) = result {
        tracing::debug!("Command failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!("🛒 {} product(s) in cart", cart.len());
    for item in cart {
        let title = item.title().unwrap_or("(untitled)");
        match (item.price(), item.line_total()) {
            (Some(price), Some(total)) => println!(
                "  #{:<4} {:<40} {:>3} x R$ {:>8.2} = R$ {:>9.2}",
                item.id, title, item.amount, price, total
            ),
            _ => println!("  #{:<4} {:<40} {:>3}", item.id, title, item.amount),
        }
    }
    println!(
        "  {} item(s), subtotal R$ {:.2}",
        cart.total_quantity(),
        cart.subtotal()
    );
}
