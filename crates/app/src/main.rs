use shelfcast_app::demo::demo_items;
use shelfcast_app::report::{render_inventory, render_restock};
use shelfcast_app::{AppConfig, AppError, InventorySystem};
use shelfcast_core::Classify;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    shelfcast_observability::init(config.log_format);

    tracing::info!(file = %config.inventory_file.display(), "starting shelfcast");
    let mut system = InventorySystem::open(&config)?;

    for item in demo_items() {
        system.add_item(item)?;
    }

    println!("Current Inventory:");
    print!("{}", render_inventory(system.view_inventory()));

    recover(system.update_stock("Phone", -20))?;

    if let Some(report) = recover(system.train_sales_forecast())? {
        println!("Model trained with MSE: {}", report.mse);
    }

    if let Some(sales) = recover(system.forecast_sales(40.0, 600.0))? {
        println!("Forecasted Sales: {sales:.2}");
    }

    println!("Items that need restocking:");
    print!("{}", render_restock(system.recommend_restock()));

    Ok(())
}

/// Print recoverable failures and carry on; propagate the rest.
fn recover<T>(result: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_recoverable() => {
            println!("{err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
