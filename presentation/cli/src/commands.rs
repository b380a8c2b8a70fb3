use business::application::catalog::controller::CatalogController;
use business::domain::catalog::value_objects::FilterCriteria;
use business::domain::shared::value_objects::ProductId;

use crate::args::{Cli, Commands};

pub async fn run(cli: Cli, controller: &mut CatalogController) -> anyhow::Result<()> {
    match cli.command {
        Commands::List {
            category,
            max_price,
            favorites_only,
        } => list(controller, category, max_price, favorites_only).await,
        Commands::Favorite { id } => toggle(controller, ProductId::new(id)),
        Commands::Favorites => list(controller, None, None, true).await,
    }
}

async fn list(
    controller: &mut CatalogController,
    category: Option<String>,
    max_price: Option<f64>,
    favorites_only: bool,
) -> anyhow::Result<()> {
    controller.fetch_products().await;

    let snapshot = controller.snapshot();
    if let Some(message) = snapshot.error_message {
        anyhow::bail!(message);
    }

    let criteria = FilterCriteria::new(category, max_price);
    let mut products = controller.filter(&criteria);
    if favorites_only {
        // favorites-only is a view concern layered over the predicate
        products.retain(|product| controller.is_favorite(product.id));
    }

    for product in &products {
        let marker = if controller.is_favorite(product.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{} [{:>5}] {:<48} {:>9.2}  {}",
            marker,
            product.id.as_i64(),
            product.title,
            product.price,
            product.category.name
        );
    }
    println!("{} products", products.len());
    Ok(())
}

fn toggle(controller: &mut CatalogController, id: ProductId) -> anyhow::Result<()> {
    controller.toggle_favorite(id);

    if controller.is_favorite(id) {
        println!("Product {} marked as favorite", id);
    } else {
        println!("Product {} is no longer a favorite", id);
    }
    Ok(())
}
