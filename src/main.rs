use clap::Parser;
use order_service::utils::error::ErrorCategory;
use order_service::utils::{logger, validation::Validate};
use order_service::{
    CatalogSeed, CliConfig, CreateOrder, CreateOrderRequest, InMemoryCustomers, InMemoryOrders,
    InMemoryProducts,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting order-service CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    let seed = match &config.catalog {
        Some(path) => CatalogSeed::from_file(path)?,
        None => {
            tracing::warn!("No catalog file given, using the built-in sample catalog");
            CatalogSeed::sample()
        }
    };

    let customers = InMemoryCustomers::new();
    let products = InMemoryProducts::new();
    let orders = InMemoryOrders::new();

    for customer in seed.customers {
        customers.insert(customer).await;
    }
    for product in seed.products {
        products.insert(product).await;
    }

    let request = CreateOrderRequest {
        customer_id: config.customer.clone(),
        items: config.requested_items()?,
    };

    let use_case = CreateOrder::new(customers, products, orders);

    match use_case.execute(request).await {
        Ok(order) => {
            tracing::info!("✅ Order {} created with {} item(s)", order.id, order.items.len());
            println!("{}", serde_json::to_string_pretty(&order)?);
        }
        Err(e) => {
            tracing::error!("❌ Order creation failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.category() {
                ErrorCategory::ClientInput => 2,
                ErrorCategory::Storage => 1,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
