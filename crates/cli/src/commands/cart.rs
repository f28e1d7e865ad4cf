//! Cart commands over the persisted cart store.

use clap::{Subcommand, ValueEnum};

use hvrdcr_market_core::{Category, ProductId};
use hvrdcr_market_storefront::error::{AppError, Result};
use hvrdcr_market_storefront::state::AppState;
use hvrdcr_market_storefront::stores::CartStore;

use super::print_table;

/// Cart operations.
#[derive(Subcommand)]
pub enum CartAction {
    /// Show cart contents and totals
    List,
    /// Add one unit of a product; repeats aggregate into one entry
    Add {
        /// Category to look the product up in
        #[arg(long, value_enum)]
        category: CategoryArg,
        /// Product id as shown by the catalog view
        product_id: String,
    },
    /// Remove an entry
    Remove {
        /// Product id of the entry
        product_id: String,
    },
    /// Set an entry's quantity; 0 removes the entry
    SetQty {
        /// Product id of the entry
        product_id: String,
        /// New quantity
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Cpu,
    Motherboard,
    Ram,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Cpu => Self::Cpu,
            CategoryArg::Motherboard => Self::Motherboard,
            CategoryArg::Ram => Self::Ram,
        }
    }
}

/// Dispatch one cart action.
pub async fn handle(state: &AppState, action: CartAction) -> Result<()> {
    let mut cart = CartStore::open(state.snapshot_store());

    match action {
        CartAction::List => list(&cart),
        CartAction::Add {
            category,
            product_id,
        } => {
            // The id is only meaningful against a fresh load of its
            // category, so adding goes back through the catalog.
            let id = ProductId::from(product_id.as_str());
            let product = state
                .catalog()
                .find_product(category.into(), &id)
                .await?
                .ok_or(AppError::UnknownProduct(product_id))?;

            let name = product.name().to_owned();
            cart.add_item(product);
            println!(
                "{name} added to the cart ({} item(s) total).",
                cart.total_item_count()
            );
        }
        CartAction::Remove { product_id } => {
            cart.remove_item(&ProductId::from(product_id.as_str()));
            println!("Removed. {} item(s) left.", cart.total_item_count());
        }
        CartAction::SetQty {
            product_id,
            quantity,
        } => {
            cart.set_quantity(&ProductId::from(product_id.as_str()), quantity);
            println!("Updated. {} item(s) in the cart.", cart.total_item_count());
        }
        CartAction::Clear => {
            cart.clear();
            println!("Cart emptied.");
        }
    }
    Ok(())
}

fn list(cart: &CartStore) {
    if cart.is_empty() {
        println!("Your cart is empty. Browse a catalog: hvrdcr catalog cpu");
        return;
    }

    let rows: Vec<Vec<String>> = cart
        .entries()
        .iter()
        .map(|entry| {
            vec![
                entry.product.id().to_string(),
                entry.product.name().to_owned(),
                entry.quantity.to_string(),
                entry.product.price().display_rub(),
                entry.line_total().display_rub(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "QTY", "UNIT PRICE", "LINE TOTAL"], &rows);

    println!();
    println!(
        "{} item(s) - total {}",
        cart.total_item_count(),
        cart.subtotal().display_rub()
    );
}
